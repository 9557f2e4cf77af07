use std::path::PathBuf;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::loader;
use crate::data::model::ResaleDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared with the loader cache.
    pub dataset: Option<Arc<ResaleDataset>>,

    /// Path the current dataset came from; target of Reload.
    pub data_path: PathBuf,

    /// Current year-range and flat-type selection.
    pub filters: FilterSelection,

    /// Indices of transactions passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Colour per flat type for the trend chart.
    pub color_map: Option<ColorMap>,

    /// Error message shown in the top bar after a failed Open/Reload.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            data_path: PathBuf::from(loader::DEFAULT_DATA_PATH),
            filters: FilterSelection {
                year_range: crate::data::filter::DEFAULT_YEAR_RANGE,
                flat_types: Default::default(),
            },
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, resetting filters and colours.
    pub fn set_dataset(&mut self, dataset: Arc<ResaleDataset>) {
        self.filters = FilterSelection::initial(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.flat_types));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` from the current filters.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(ds, &self.filters),
            None => Vec::new(),
        };
    }

    /// Set the year interval, clamped to the data bounds and kept ordered.
    pub fn set_year_range(&mut self, mut lo: i32, mut hi: i32) {
        if let Some(ds) = &self.dataset {
            if let Some((min, max)) = ds.year_bounds() {
                lo = lo.clamp(min, max);
                hi = hi.clamp(min, max);
            }
        }
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        self.filters.year_range = (lo, hi);
        self.refilter();
    }

    /// Toggle a single flat type in the selection.
    pub fn toggle_flat_type(&mut self, flat_type: &str) {
        if !self.filters.flat_types.remove(flat_type) {
            self.filters.flat_types.insert(flat_type.to_string());
        }
        self.refilter();
    }

    /// Select every flat type present in the dataset.
    pub fn select_all_types(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filters.flat_types = ds.flat_types.clone();
        }
        self.refilter();
    }

    /// Clear the flat-type selection (hides every row).
    pub fn select_no_types(&mut self) {
        self.filters.flat_types.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Transaction;

    fn dataset() -> Arc<ResaleDataset> {
        let tx = |year, flat_type: &str| Transaction {
            year,
            town: "BEDOK".to_string(),
            flat_type: flat_type.to_string(),
            floor_area_sqm: 70.0,
            resale_price: 400_000.0,
        };
        Arc::new(ResaleDataset::from_transactions(vec![
            tx(2014, "3 ROOM"),
            tx(2018, "3 ROOM"),
            tx(2020, "4 ROOM"),
        ]))
    }

    #[test]
    fn set_dataset_initialises_filters_and_view() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        assert_eq!(state.filters.year_range, (2015, 2020));
        assert_eq!(state.filters.flat_types.len(), 2);
        // 2014 row falls outside the clamped default range.
        assert_eq!(state.visible_indices, vec![1, 2]);
    }

    #[test]
    fn year_range_is_clamped_and_ordered() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_year_range(2030, 1999);
        assert_eq!(state.filters.year_range, (2014, 2020));
    }

    #[test]
    fn type_toggles_drive_the_visible_view() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_year_range(2014, 2020);

        state.select_no_types();
        assert!(state.visible_indices.is_empty());

        state.toggle_flat_type("4 ROOM");
        assert_eq!(state.visible_indices, vec![2]);

        state.select_all_types();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }
}
