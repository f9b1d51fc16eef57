use grid_launcher::catalog::Catalog;
use grid_launcher::config::ConfigStore;
use grid_launcher::gui::LauncherApp;
use grid_launcher::logging;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let store = ConfigStore::new(ConfigStore::default_path());
    // subscriber first, so first-run and corruption diagnostics from the
    // load are not dropped
    logging::init(store.debug_logging_hint());
    let catalog = Catalog::open(store);
    tracing::info!("config loaded from {}", catalog.store().path().display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Launcher",
        native_options,
        Box::new(move |cc| Box::new(LauncherApp::new(cc, catalog))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
