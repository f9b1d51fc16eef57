use crate::catalog::{Catalog, Category};
use eframe::egui;
use egui_toast::{ToastKind, Toasts};

use super::push_toast;

/// Add/edit modal for categories. An empty `editing_id` means "create".
#[derive(Default)]
pub struct CategoryDialog {
    pub open: bool,
    editing_id: Option<String>,
    name: String,
    icon: String,
    error: Option<String>,
}

impl CategoryDialog {
    pub fn open_new(&mut self) {
        *self = Self {
            open: true,
            icon: "fa-folder".into(),
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, category: &Category) {
        *self = Self {
            open: true,
            editing_id: Some(category.id.clone()),
            name: category.name.clone(),
            icon: category.icon.clone(),
            error: None,
        };
    }

    pub fn ui(&mut self, ctx: &egui::Context, catalog: &mut Catalog, toasts: &mut Toasts) {
        if !self.open {
            return;
        }
        let title = if self.editing_id.is_some() {
            "Edit Category"
        } else {
            "Add Category"
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
                ui.label("Icon");
                ui.text_edit_singleline(&mut self.icon);
            });
            ui.horizontal(|ui| {
                let save_label = if self.editing_id.is_some() {
                    "Save"
                } else {
                    "Add"
                };
                if ui.button(save_label).clicked() {
                    let result = match &self.editing_id {
                        Some(id) => catalog
                            .update_category(id, &self.name, &self.icon)
                            .map(|_| "Category updated".to_string()),
                        None => catalog
                            .add_category(&self.name, &self.icon)
                            .map(|c| format!("Category '{}' added", c.name)),
                    };
                    match result {
                        Ok(msg) => {
                            push_toast(toasts, ToastKind::Success, msg);
                            close = true;
                        }
                        Err(e) if e.is_rejection() => self.error = Some(e.to_string()),
                        Err(e) => {
                            // Mutation applied but the save failed; surface
                            // it and leave the dialog closed.
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
