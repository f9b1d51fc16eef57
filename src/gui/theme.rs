use crate::settings::{Settings, Theme};
use eframe::egui;

pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Apply the persisted look to the egui context. Called on startup and
/// whenever the settings block changes.
pub fn apply(ctx: &egui::Context, settings: &Settings) {
    ctx.set_visuals(visuals(settings.theme));
    let mut style = (*ctx.style()).clone();
    style.animation_time = if settings.animations { 0.1 } else { 0.0 };
    ctx.set_style(style);
}
