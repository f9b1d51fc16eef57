use crate::catalog::{Catalog, Item, ItemDraft, ItemKind, UNCATEGORIZED};
use eframe::egui;
use egui_toast::{ToastKind, Toasts};
use rfd::FileDialog;

use super::push_toast;

const KIND_CHOICES: &[ItemKind] = &[
    ItemKind::Url,
    ItemKind::File,
    ItemKind::Folder,
    ItemKind::Command,
];

/// Add/edit modal for items. Mirrors the catalog's creation rules: the
/// terminal checkbox only exists for command items and the icon preset
/// follows the selected kind until the user overrides it.
#[derive(Default)]
pub struct ItemDialog {
    pub open: bool,
    editing_id: Option<String>,
    name: String,
    kind: ItemKind,
    command: String,
    category_id: Option<String>,
    icon: String,
    run_in_terminal: bool,
    error: Option<String>,
}

impl ItemDialog {
    pub fn open_new(&mut self, preselected_category: Option<String>, catalog: &Catalog) {
        // the combo offers no uncategorized entry for new items, so the
        // selection must start on a real category
        let category_id = preselected_category
            .or_else(|| catalog.categories().first().map(|c| c.id.clone()));
        *self = Self {
            open: true,
            kind: ItemKind::Command,
            category_id,
            icon: ItemKind::Command.default_icon().into(),
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, item: &Item) {
        *self = Self {
            open: true,
            editing_id: Some(item.id.clone()),
            name: item.name.clone(),
            kind: item.kind,
            command: item.command.clone(),
            category_id: item.category_id.clone(),
            icon: item.icon.clone(),
            run_in_terminal: item.run_in_terminal.unwrap_or(false),
            error: None,
        };
    }

    pub fn ui(&mut self, ctx: &egui::Context, catalog: &mut Catalog, toasts: &mut Toasts) {
        if !self.open {
            return;
        }
        let title = if self.editing_id.is_some() {
            "Edit Item"
        } else {
            "Add Item"
        };
        let mut open = self.open;
        let mut close = false;

        egui::Window::new(title).open(&mut open).show(ctx, |ui| {
            if let Some(err) = &self.error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
            ui.horizontal(|ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut self.name);
            });
            ui.horizontal(|ui| {
                ui.label("Type");
                let before = self.kind;
                egui::ComboBox::from_id_source("item_kind")
                    .selected_text(self.kind.label())
                    .show_ui(ui, |ui| {
                        for kind in KIND_CHOICES {
                            ui.selectable_value(&mut self.kind, *kind, kind.label());
                        }
                    });
                if self.kind != before {
                    // follow the preset until the user types their own
                    if self.icon.is_empty() || self.icon == before.default_icon() {
                        self.icon = self.kind.default_icon().into();
                    }
                }
            });
            ui.horizontal(|ui| {
                let label = match self.kind {
                    ItemKind::Url => "URL",
                    ItemKind::File | ItemKind::Folder => "Path",
                    _ => "Command",
                };
                ui.label(label);
                ui.text_edit_singleline(&mut self.command);
                if matches!(self.kind, ItemKind::File | ItemKind::Folder) {
                    if ui.button("Browse").clicked() {
                        let picked = if self.kind == ItemKind::File {
                            FileDialog::new().pick_file()
                        } else {
                            FileDialog::new().pick_folder()
                        };
                        if let Some(path) = picked {
                            self.command = path.display().to_string();
                        }
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Category");
                let selected = self
                    .category_id
                    .as_deref()
                    .and_then(|id| catalog.category(id))
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                egui::ComboBox::from_id_source("item_category")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        // new items must land in a category; only existing
                        // items may be moved back to uncategorized
                        if self.editing_id.is_some() {
                            ui.selectable_value(&mut self.category_id, None, UNCATEGORIZED);
                        }
                        for category in catalog.categories() {
                            ui.selectable_value(
                                &mut self.category_id,
                                Some(category.id.clone()),
                                &category.name,
                            );
                        }
                    });
            });
            ui.horizontal(|ui| {
                ui.label("Icon");
                ui.text_edit_singleline(&mut self.icon);
            });
            if self.kind == ItemKind::Command {
                ui.checkbox(&mut self.run_in_terminal, "Run in terminal");
            }
            ui.horizontal(|ui| {
                let save_label = if self.editing_id.is_some() {
                    "Save"
                } else {
                    "Add"
                };
                if ui.button(save_label).clicked() {
                    let draft = ItemDraft {
                        name: self.name.clone(),
                        kind: self.kind,
                        command: self.command.clone(),
                        category_id: self.category_id.clone(),
                        icon: self.icon.clone(),
                        run_in_terminal: self.run_in_terminal,
                    };
                    let result = match &self.editing_id {
                        Some(id) => catalog
                            .update_item(id, draft)
                            .map(|_| "Item updated".to_string()),
                        None => catalog
                            .add_item(draft)
                            .map(|i| format!("Item '{}' added", i.name)),
                    };
                    match result {
                        Ok(msg) => {
                            push_toast(toasts, ToastKind::Success, msg);
                            close = true;
                        }
                        Err(e) if e.is_rejection() => self.error = Some(e.to_string()),
                        Err(e) => {
                            push_toast(toasts, ToastKind::Error, e.to_string());
                            close = true;
                        }
                    }
                }
                if ui.button("Cancel").clicked() {
                    close = true;
                }
            });
        });

        self.open = open && !close;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use tempfile::tempdir;

    #[test]
    fn new_item_dialog_starts_on_a_real_category() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(ConfigStore::new(dir.path().join("config.json")));
        let dev = catalog.add_category("Dev", "").unwrap();
        let games = catalog.add_category("Games", "").unwrap();

        let mut dialog = ItemDialog::default();
        dialog.open_new(None, &catalog);
        assert_eq!(dialog.category_id.as_deref(), Some(dev.id.as_str()));

        dialog.open_new(Some(games.id.clone()), &catalog);
        assert_eq!(dialog.category_id, Some(games.id));
    }
}
