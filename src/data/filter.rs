use std::collections::BTreeSet;

use super::model::ResaleDataset;

/// Year interval pre-selected when a dataset is first loaded, clamped into
/// the data's observed bounds.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2015, 2023);

// ---------------------------------------------------------------------------
// Filter selection: year interval + chosen flat types
// ---------------------------------------------------------------------------

/// The user's current filter choices.
///
/// `year_range` is inclusive on both ends. An empty `flat_types` set means
/// nothing is selected, so no row passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub year_range: (i32, i32),
    pub flat_types: BTreeSet<String>,
}

impl FilterSelection {
    /// Initial selection for a freshly loaded dataset: the default year
    /// range clamped into the observed bounds (the full bounds when the
    /// default misses the data entirely), with every flat type selected.
    pub fn initial(dataset: &ResaleDataset) -> Self {
        let year_range = match dataset.year_bounds() {
            Some((min, max)) => {
                // Intersect the fixed default with the observed bounds.
                let lo = DEFAULT_YEAR_RANGE.0.max(min);
                let hi = DEFAULT_YEAR_RANGE.1.min(max);
                if lo <= hi {
                    (lo, hi)
                } else {
                    (min, max)
                }
            }
            None => DEFAULT_YEAR_RANGE,
        };

        FilterSelection {
            year_range,
            flat_types: dataset.flat_types.clone(),
        }
    }
}

/// Return indices of transactions that pass the current selection.
///
/// The row test is conjunctive: `year` inside the inclusive interval and
/// `flat_type` in the selected set. Pure and order-preserving, so the
/// result is always a subset of `0..dataset.len()` in ascending order.
/// An empty type set or an interval excluding every row yields an empty
/// list rather than an error.
pub fn filtered_indices(dataset: &ResaleDataset, selection: &FilterSelection) -> Vec<usize> {
    let (lo, hi) = selection.year_range;
    dataset
        .transactions
        .iter()
        .enumerate()
        .filter(|(_, tx)| {
            lo <= tx.year && tx.year <= hi && selection.flat_types.contains(&tx.flat_type)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Transaction;

    fn tx(year: i32, town: &str, flat_type: &str, area: f64, price: f64) -> Transaction {
        Transaction {
            year,
            town: town.to_string(),
            flat_type: flat_type.to_string(),
            floor_area_sqm: area,
            resale_price: price,
        }
    }

    /// The four-row fixture used across the filter and aggregate tests.
    fn sample_dataset() -> ResaleDataset {
        ResaleDataset::from_transactions(vec![
            tx(2015, "BEDOK", "3 ROOM", 65.0, 300_000.0),
            tx(2016, "BEDOK", "3 ROOM", 65.0, 320_000.0),
            tx(2015, "YISHUN", "4 ROOM", 90.0, 350_000.0),
            tx(2023, "YISHUN", "4 ROOM", 90.0, 500_000.0),
        ])
    }

    fn selection(range: (i32, i32), types: &[&str]) -> FilterSelection {
        FilterSelection {
            year_range: range,
            flat_types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn conjunctive_filter_keeps_matching_rows_in_order() {
        let ds = sample_dataset();
        let sel = selection((2015, 2016), &["3 ROOM"]);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1]);
    }

    #[test]
    fn range_excluding_all_rows_yields_empty_view() {
        let ds = sample_dataset();
        let sel = selection((2020, 2022), &["3 ROOM", "4 ROOM"]);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_type_set_yields_empty_view() {
        let ds = sample_dataset();
        let sel = selection((2015, 2023), &[]);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let ds = sample_dataset();
        let sel = selection((2015, 2015), &["3 ROOM", "4 ROOM"]);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let sel = selection((2015, 2016), &["3 ROOM", "4 ROOM"]);

        let once = filtered_indices(&ds, &sel);
        let reapplied = ResaleDataset::from_transactions(
            once.iter().map(|&i| ds.transactions[i].clone()).collect(),
        );
        let twice = filtered_indices(&reapplied, &sel);
        assert_eq!(twice.len(), once.len());
        assert_eq!(
            (0..once.len()).collect::<Vec<_>>(),
            twice,
            "re-filtering its own output must keep every row"
        );
    }

    #[test]
    fn narrowing_never_grows_the_view() {
        let ds = sample_dataset();
        let wide = filtered_indices(&ds, &selection((2015, 2023), &["3 ROOM", "4 ROOM"]));
        let narrower_years = filtered_indices(&ds, &selection((2015, 2016), &["3 ROOM", "4 ROOM"]));
        let narrower_types = filtered_indices(&ds, &selection((2015, 2023), &["4 ROOM"]));

        assert!(narrower_years.len() <= wide.len());
        assert!(narrower_types.len() <= wide.len());
    }

    #[test]
    fn initial_selection_clamps_default_range_and_selects_all_types() {
        let ds = sample_dataset();
        let sel = FilterSelection::initial(&ds);
        assert_eq!(sel.year_range, (2015, 2023));
        assert_eq!(sel.flat_types, ds.flat_types);

        // Data entirely before the fixed default: fall back to full bounds.
        let old = ResaleDataset::from_transactions(vec![
            tx(2001, "BEDOK", "3 ROOM", 65.0, 180_000.0),
            tx(2004, "BEDOK", "3 ROOM", 65.0, 200_000.0),
        ]);
        let sel = FilterSelection::initial(&old);
        assert_eq!(sel.year_range, (2001, 2004));
    }
}
