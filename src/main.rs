//! Gess GUI
//!
//! Two players share one window and alternate moves.
//! Set `RUST_LOG=gess=info` to log each accepted move.

use gess::ui::GessApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gess"),
        ..Default::default()
    };

    eframe::run_native("Gess", options, Box::new(|cc| Ok(Box::new(GessApp::new(cc)))))
}
