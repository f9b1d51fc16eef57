mod category_dialog;
mod confirm_modal;
mod item_dialog;
mod theme;

use crate::catalog::{Catalog, Category, Item};
use crate::config::ConfigStore;
use crate::dispatch::{self, Outcome};
use crate::settings::Layout;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use rfd::FileDialog;

use category_dialog::CategoryDialog;
use confirm_modal::{ConfirmModal, PendingAction};
use item_dialog::ItemDialog;

const TOAST_SECONDS: f64 = 3.0;

pub(crate) fn push_toast(toasts: &mut Toasts, kind: ToastKind, text: impl Into<String>) {
    toasts.add(Toast {
        text: text.into().into(),
        kind,
        options: ToastOptions::default().duration_in_seconds(TOAST_SECONDS),
    });
}

/// User gestures collected while walking the item grid; applied after the
/// loop so rendering never holds a borrow across a mutation.
enum GridAction {
    Run(Item),
    Edit(Item),
    AskDelete(Item),
}

pub struct LauncherApp {
    catalog: Catalog,
    query: String,
    selected_category: Option<String>,
    item_dialog: ItemDialog,
    category_dialog: CategoryDialog,
    confirm: ConfirmModal,
    toasts: Toasts,
}

impl LauncherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        theme::apply(&cc.egui_ctx, catalog.settings());
        Self {
            catalog,
            query: String::new(),
            selected_category: None,
            item_dialog: ItemDialog::default(),
            category_dialog: CategoryDialog::default(),
            confirm: ConfirmModal::default(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
        }
    }

    fn run_item(&mut self, item: &Item) {
        match dispatch::dispatch(item, self.catalog.settings()) {
            Outcome::Launched { output } => {
                if let Some(out) = output {
                    tracing::info!("'{}' output: {out}", item.name);
                }
                push_toast(
                    &mut self.toasts,
                    ToastKind::Success,
                    format!("Launched '{}'", item.name),
                );
            }
            Outcome::Failed { reason } => push_toast(
                &mut self.toasts,
                ToastKind::Error,
                format!("'{}' failed: {reason}", item.name),
            ),
            Outcome::UnknownKind => push_toast(
                &mut self.toasts,
                ToastKind::Warning,
                format!("'{}' has an unknown type", item.name),
            ),
        }
    }

    fn update_settings(
        &mut self,
        ctx: &egui::Context,
        change: impl FnOnce(&mut crate::settings::Settings),
    ) {
        let mut settings = self.catalog.settings().clone();
        change(&mut settings);
        if let Err(e) = self.catalog.set_settings(settings) {
            push_toast(&mut self.toasts, ToastKind::Error, e.to_string());
        }
        theme::apply(ctx, self.catalog.settings());
    }

    fn export_config(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("config.json")
            .save_file()
        else {
            return; // cancelled picker is a no-op
        };
        match ConfigStore::export_to(&path, self.catalog.document()) {
            Ok(()) => push_toast(
                &mut self.toasts,
                ToastKind::Success,
                format!("Exported to {}", path.display()),
            ),
            Err(e) => push_toast(&mut self.toasts, ToastKind::Error, e.to_string()),
        }
    }

    fn import_config(&mut self) {
        let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };
        match ConfigStore::import_from(&path) {
            Ok(doc) => self.confirm.request(PendingAction::ReplaceDocument {
                doc: Box::new(doc),
                origin: path.display().to_string(),
            }),
            Err(e) => push_toast(
                &mut self.toasts,
                ToastKind::Error,
                format!("Import failed: {e}"),
            ),
        }
    }

    fn apply_confirmed(&mut self, action: PendingAction) {
        let result = match action {
            PendingAction::DeleteCategory { id, name, .. } => self
                .catalog
                .delete_category(&id)
                .map(|_| format!("Category '{name}' deleted")),
            PendingAction::DeleteItem { id, name } => self
                .catalog
                .delete_item(&id)
                .map(|_| format!("Item '{name}' deleted")),
            PendingAction::ReplaceDocument { doc, origin } => self
                .catalog
                .replace_document(*doc)
                .map(|_| format!("Configuration imported from {origin}")),
        };
        match result {
            Ok(msg) => push_toast(&mut self.toasts, ToastKind::Success, msg),
            Err(e) => push_toast(&mut self.toasts, ToastKind::Error, e.to_string()),
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Grid Launcher");
            ui.separator();

            let search = ui.add(
                egui::TextEdit::singleline(&mut self.query).hint_text("Search name or command"),
            );
            if search.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.query.clear();
            }

            if ui.button("New item").clicked() {
                if self.catalog.categories().is_empty() {
                    push_toast(
                        &mut self.toasts,
                        ToastKind::Warning,
                        "Add at least one category before creating items",
                    );
                } else {
                    self.item_dialog
                        .open_new(self.selected_category.clone(), &self.catalog);
                }
            }
            if ui.button("New category").clicked() {
                self.category_dialog.open_new();
            }
            if ui.button("Refresh").clicked() {
                self.catalog.reload();
                push_toast(&mut self.toasts, ToastKind::Info, "Reloaded from disk");
            }
            if ui.button("Import").clicked() {
                self.import_config();
            }
            if ui.button("Export").clicked() {
                self.export_config();
            }

            let theme_label = format!("{}", self.catalog.settings().theme.toggled());
            if ui.button(theme_label).clicked() {
                self.update_settings(ctx, |s| s.theme = s.theme.toggled());
            }
            let layout_label = match self.catalog.settings().layout {
                Layout::Grid => "List view",
                Layout::List => "Grid view",
            };
            if ui.button(layout_label).clicked() {
                self.update_settings(ctx, |s| {
                    s.layout = match s.layout {
                        Layout::Grid => Layout::List,
                        Layout::List => Layout::Grid,
                    }
                });
            }
        });
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Categories");
        ui.separator();

        let all_selected = self.selected_category.is_none();
        let all_label = format!("All items ({})", self.catalog.items().len());
        if ui.selectable_label(all_selected, all_label).clicked() {
            self.selected_category = None;
        }

        let categories: Vec<Category> = self.catalog.categories().to_vec();
        let mut edit: Option<Category> = None;
        let mut ask_delete: Option<Category> = None;

        for category in &categories {
            ui.horizontal(|ui| {
                let selected = self.selected_category.as_deref() == Some(category.id.as_str());
                let label = format!(
                    "{} ({})",
                    category.name,
                    self.catalog.items_in(&category.id)
                );
                if ui.selectable_label(selected, label).clicked() {
                    self.selected_category = Some(category.id.clone());
                }
                if ui.small_button("✏").on_hover_text("Edit").clicked() {
                    edit = Some(category.clone());
                }
                if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                    ask_delete = Some(category.clone());
                }
            });
        }

        if let Some(category) = edit {
            self.category_dialog.open_edit(&category);
        }
        if let Some(category) = ask_delete {
            let item_count = self.catalog.items_in(&category.id);
            self.confirm.request(PendingAction::DeleteCategory {
                id: category.id,
                name: category.name,
                item_count,
            });
        }
    }

    fn item_grid(&mut self, ui: &mut egui::Ui) {
        let items: Vec<Item> = self
            .catalog
            .query(self.selected_category.as_deref(), &self.query)
            .into_iter()
            .cloned()
            .collect();

        if items.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                if self.query.trim().is_empty() {
                    ui.label("No items yet. Add your first launcher item.");
                } else {
                    ui.label("No items match the search.");
                }
            });
            return;
        }

        let layout = self.catalog.settings().layout;
        let mut action: Option<GridAction> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            let mut card = |ui: &mut egui::Ui, item: &Item, size: [f32; 2]| {
                let text = format!("{}\n{}", item.name, item.category_name);
                let response = ui.add_sized(size, egui::Button::new(text));
                if response.clicked() {
                    action = Some(GridAction::Run(item.clone()));
                }
                response.context_menu(|ui| {
                    if ui.button("Run").clicked() {
                        action = Some(GridAction::Run(item.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Edit").clicked() {
                        action = Some(GridAction::Edit(item.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Delete").clicked() {
                        action = Some(GridAction::AskDelete(item.clone()));
                        ui.close_menu();
                    }
                });
            };

            match layout {
                Layout::Grid => {
                    ui.horizontal_wrapped(|ui| {
                        for item in &items {
                            card(ui, item, [170.0, 56.0]);
                        }
                    });
                }
                Layout::List => {
                    let width = ui.available_width();
                    for item in &items {
                        card(ui, item, [width, 40.0]);
                    }
                }
            }
        });

        match action {
            Some(GridAction::Run(item)) => self.run_item(&item),
            Some(GridAction::Edit(item)) => self.item_dialog.open_edit(&item),
            Some(GridAction::AskDelete(item)) => {
                self.confirm.request(PendingAction::DeleteItem {
                    id: item.id,
                    name: item.name,
                });
            }
            None => {}
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ctx, ui);
        });

        egui::SidePanel::left("categories")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.item_grid(ui);
        });

        self.item_dialog.ui(ctx, &mut self.catalog, &mut self.toasts);
        self.category_dialog
            .ui(ctx, &mut self.catalog, &mut self.toasts);
        if let Some(action) = self.confirm.ui(ctx) {
            self.apply_confirmed(action);
        }

        self.toasts.show(ctx);
    }
}
