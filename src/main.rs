mod app;
mod config;
mod document;
mod selection;
mod upload;
mod utils;

use app::DocDropApp;
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docdrop=info")),
        )
        .init();

    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "DocDrop",
        options,
        Box::new(move |cc| Box::new(DocDropApp::new(cc, &config))),
    ) {
        tracing::error!(error = %e, "failed to start ui");
    }
}
