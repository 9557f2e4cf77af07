use eframe::egui::{self, CollapsingHeader, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ResaleLensApp {
    pub state: AppState,
}

impl ResaleLensApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ResaleLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Central dashboard page
// ---------------------------------------------------------------------------

fn dashboard(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to begin  (File → Open…)");
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Singapore Resale Prices Dashboard");
            ui.label("Explore insights from the resale prices dataset.");
            ui.add_space(8.0);

            CollapsingHeader::new(RichText::new("Dataset preview").strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    table::preview_table(ui, dataset);
                });

            ui.add_space(12.0);
            ui.heading("Resale price trends over time");
            ui.label("Average resale price per year, one line per selected flat type.");
            charts::trend_chart(ui, dataset, &state.visible_indices, state.color_map.as_ref());

            ui.add_space(12.0);
            ui.heading("Average resale price by town");
            ui.label(
                "Compares average resale prices across towns, so buyers can weigh \
                 affordability by location.",
            );
            charts::town_chart(ui, dataset, &state.visible_indices);

            ui.add_space(12.0);
            ui.heading("Price vs floor area");
            ui.label(
                "Each dot is one transaction. The red line is the least-squares trend: \
                 larger flats tend to sell for more.",
            );
            charts::regression_chart(ui, dataset, &state.visible_indices);
        });
}
