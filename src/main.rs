mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;

use app::ResaleLensApp;
use data::loader;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A missing or malformed dataset at startup is fatal. Loads triggered
    // later from the File menu only surface a status line instead.
    let data_path = PathBuf::from(loader::DEFAULT_DATA_PATH);
    let dataset = loader::load_cached(&data_path)
        .with_context(|| format!("loading dataset from {}", data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resale Lens – Singapore Resale Prices",
        options,
        Box::new(move |_cc| {
            let mut state = AppState {
                data_path,
                ..AppState::default()
            };
            state.set_dataset(dataset);
            Ok(Box::new(ResaleLensApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))?;

    Ok(())
}
