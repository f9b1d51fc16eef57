use crate::catalog::Document;
use eframe::egui;

/// A destructive step waiting for the user's explicit go-ahead.
#[derive(Debug, Clone)]
pub enum PendingAction {
    DeleteCategory {
        id: String,
        name: String,
        item_count: usize,
    },
    DeleteItem {
        id: String,
        name: String,
    },
    /// A parsed import; the in-memory document is only replaced once
    /// confirmed, so cancelling here is a complete no-op.
    ReplaceDocument {
        doc: Box<Document>,
        origin: String,
    },
}

impl PendingAction {
    fn title(&self) -> &'static str {
        match self {
            PendingAction::DeleteCategory { .. } => "Delete category",
            PendingAction::DeleteItem { .. } => "Delete item",
            PendingAction::ReplaceDocument { .. } => "Import configuration",
        }
    }

    fn description(&self) -> String {
        match self {
            PendingAction::DeleteCategory {
                name, item_count, ..
            } => format!(
                "Delete category '{name}' and the {item_count} item(s) in it?"
            ),
            PendingAction::DeleteItem { name, .. } => {
                format!("Delete '{name}'?")
            }
            PendingAction::ReplaceDocument { origin, .. } => format!(
                "Replace the entire current configuration with '{origin}'?"
            ),
        }
    }
}

#[derive(Default)]
pub struct ConfirmModal {
    pending: Option<PendingAction>,
}

impl ConfirmModal {
    pub fn request(&mut self, action: PendingAction) {
        self.pending = Some(action);
    }

    /// Show the modal if a request is pending. Returns the action once the
    /// user confirms; cancel drops it.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<PendingAction> {
        let pending = self.pending.as_ref()?;
        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(pending.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(pending.description());
                ui.colored_label(ui.visuals().warn_fg_color, "This action cannot be undone.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            return self.pending.take();
        }
        if cancelled {
            self.pending = None;
        }
        None
    }
}
