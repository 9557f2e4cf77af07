use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::aggregate;
use crate::data::model::ResaleDataset;

const CHART_HEIGHT: f32 = 280.0;
const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// Trend chart: mean resale price per year, one line per flat type
// ---------------------------------------------------------------------------

/// Render the price-over-time trend. An empty view draws an empty plot.
pub fn trend_chart(
    ui: &mut Ui,
    dataset: &ResaleDataset,
    indices: &[usize],
    color_map: Option<&ColorMap>,
) {
    let series = aggregate::trend_series(dataset, indices);

    Plot::new("price_trend")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Average resale price (SGD)")
        .show(ui, |plot_ui| {
            for (flat_type, points) in &series {
                let color = color_map
                    .map(|cm| cm.color_for(flat_type))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let coords: Vec<[f64; 2]> = points
                    .iter()
                    .map(|&(year, mean)| [f64::from(year), mean])
                    .collect();

                let line: PlotPoints = coords.clone().into();
                plot_ui.line(Line::new(line).name(flat_type).color(color).width(1.5));

                // Marker at each (year, mean) data point.
                let markers: PlotPoints = coords.into();
                plot_ui.points(
                    Points::new(markers)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart: mean resale price per town
// ---------------------------------------------------------------------------

/// Render the per-town averages as one bar per town, labelled on the x axis.
pub fn town_chart(ui: &mut Ui, dataset: &ResaleDataset, indices: &[usize]) {
    let means = aggregate::town_means(dataset, indices);
    let labels: Vec<String> = means.iter().map(|(town, _)| town.clone()).collect();

    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, (town, mean))| Bar::new(i as f64, *mean).name(town).width(0.6))
        .collect();

    Plot::new("town_averages")
        .height(CHART_HEIGHT)
        .x_axis_label("Town")
        .y_axis_label("Average resale price (SGD)")
        .x_axis_formatter(move |mark, _range| {
            // Ticks land on integer bar positions only.
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 0.001 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(STEEL_BLUE)
                    .name("Average resale price"),
            );
        });
}

// ---------------------------------------------------------------------------
// Scatter + OLS overlay: resale price vs floor area
// ---------------------------------------------------------------------------

/// Render the price-vs-area scatter with the least-squares line overlaid.
/// With fewer than two points (or constant area) the line is simply omitted.
pub fn regression_chart(ui: &mut Ui, dataset: &ResaleDataset, indices: &[usize]) {
    let coords: Vec<[f64; 2]> = indices
        .iter()
        .map(|&i| {
            let tx = &dataset.transactions[i];
            [tx.floor_area_sqm, tx.resale_price]
        })
        .collect();
    let fit = aggregate::price_area_fit(dataset, indices);

    Plot::new("price_vs_area")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Floor area (sqm)")
        .y_axis_label("Resale price (SGD)")
        .show(ui, |plot_ui| {
            if !coords.is_empty() {
                // Semi-transparent points so dense regions read darker.
                let scatter: PlotPoints = coords.clone().into();
                plot_ui.points(
                    Points::new(scatter)
                        .color(Color32::from_rgba_unmultiplied(70, 130, 180, 96))
                        .radius(2.0)
                        .name("Transactions"),
                );
            }

            if let Some(fit) = fit {
                let x_min = coords.iter().map(|c| c[0]).fold(f64::INFINITY, f64::min);
                let x_max = coords
                    .iter()
                    .map(|c| c[0])
                    .fold(f64::NEG_INFINITY, f64::max);
                let line: PlotPoints =
                    vec![[x_min, fit.predict(x_min)], [x_max, fit.predict(x_max)]].into();
                plot_ui.line(Line::new(line).color(Color32::RED).width(2.0).name("OLS fit"));
            }
        });
}
