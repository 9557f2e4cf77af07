use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: flat type → Color32
// ---------------------------------------------------------------------------

/// Maps the distinct flat types to distinct colours, stable across frames
/// because the input set is sorted.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the sorted distinct flat types.
    pub fn new(flat_types: &BTreeSet<String>) -> Self {
        let palette = generate_palette(flat_types.len());
        let mapping: BTreeMap<String, Color32> = flat_types
            .iter()
            .zip(palette.into_iter())
            .map(|(t, c)| (t.clone(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a flat type.
    pub fn color_for(&self, flat_type: &str) -> Color32 {
        self.mapping
            .get(flat_type)
            .copied()
            .unwrap_or(self.default_color)
    }
}
