use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::ResaleDataset;

/// Number of rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 10;

/// Render the first rows of the full table (unfiltered, like a head() view).
pub fn preview_table(ui: &mut Ui, dataset: &ResaleDataset) {
    let rows = &dataset.transactions[..dataset.len().min(PREVIEW_ROWS)];
    if rows.is_empty() {
        ui.label("Dataset has no rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Year",
                "Town",
                "Flat type",
                "Floor area (sqm)",
                "Resale price (SGD)",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for tx in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(tx.year.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&tx.town);
                    });
                    row.col(|ui| {
                        ui.label(&tx.flat_type);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", tx.floor_area_sqm));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", tx.resale_price));
                    });
                });
            }
        });
}
