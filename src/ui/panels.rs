use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => Arc::clone(ds),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Year range");
            match dataset.year_bounds() {
                Some((min, max)) => {
                    let (mut lo, mut hi) = state.filters.year_range;
                    let from = ui.add(egui::Slider::new(&mut lo, min..=max).text("From"));
                    let to = ui.add(egui::Slider::new(&mut hi, min..=max).text("To"));
                    if from.changed() || to.changed() {
                        // Dragging one end past the other drags that end along.
                        if from.changed() && lo > hi {
                            hi = lo;
                        }
                        if to.changed() && hi < lo {
                            lo = hi;
                        }
                        state.set_year_range(lo, hi);
                    }
                }
                None => {
                    ui.label("Dataset has no rows.");
                }
            }
            ui.separator();

            // ---- Flat type multi-select ----
            let n_selected = state.filters.flat_types.len();
            let n_total = dataset.flat_types.len();
            ui.strong(format!("Flat type  ({n_selected}/{n_total})"));

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_types();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_types();
                }
            });

            for flat_type in &dataset.flat_types {
                let mut text = RichText::new(flat_type);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(flat_type));
                }

                let mut checked = state.filters.flat_types.contains(flat_type);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_flat_type(flat_type);
                }
            }
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                reload(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} transactions loaded, {} matching filters",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File actions
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open resale transactions")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(state, path);
    }
}

/// Re-read the current path, bypassing the memoized table.
fn reload(state: &mut AppState) {
    loader::invalidate(&state.data_path);
    let path = state.data_path.clone();
    load_into_state(state, path);
}

fn load_into_state(state: &mut AppState, path: PathBuf) {
    match loader::load_cached(&path) {
        Ok(dataset) => {
            state.data_path = path;
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("failed to load dataset: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
