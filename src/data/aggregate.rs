use std::collections::BTreeMap;

use super::model::ResaleDataset;

// ---------------------------------------------------------------------------
// Grouped means
// ---------------------------------------------------------------------------

/// Mean resale price per `(flat_type, year)` over the given row indices.
///
/// Returns one year-sorted series per flat type, ready for the trend chart.
/// Flat types without any row in the view are absent from the map.
pub fn trend_series(
    dataset: &ResaleDataset,
    indices: &[usize],
) -> BTreeMap<String, Vec<(i32, f64)>> {
    let mut sums: BTreeMap<(String, i32), (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let tx = &dataset.transactions[i];
        let entry = sums.entry((tx.flat_type.clone(), tx.year)).or_insert((0.0, 0));
        entry.0 += tx.resale_price;
        entry.1 += 1;
    }

    let mut series: BTreeMap<String, Vec<(i32, f64)>> = BTreeMap::new();
    for ((flat_type, year), (sum, count)) in sums {
        series
            .entry(flat_type)
            .or_default()
            .push((year, sum / count as f64));
    }
    // BTreeMap iteration already visited years in ascending order per type.
    series
}

/// Mean resale price per town over the given row indices, sorted by town.
///
/// Towns with zero rows in the view do not appear; there are never zero or
/// NaN placeholder entries.
pub fn town_means(dataset: &ResaleDataset, indices: &[usize]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let tx = &dataset.transactions[i];
        let entry = sums.entry(tx.town.clone()).or_insert((0.0, 0));
        entry.0 += tx.resale_price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(town, (sum, count))| (town, sum / count as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// Ordinary least squares
// ---------------------------------------------------------------------------

/// Slope and intercept of a least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit resale price against floor area over the given row indices.
///
/// Returns `None` for fewer than two points or when every x is identical
/// (the singular case), so callers simply omit the overlay line.
pub fn price_area_fit(dataset: &ResaleDataset, indices: &[usize]) -> Option<LinearFit> {
    let n = indices.len();
    if n < 2 {
        return None;
    }

    let (mut sum_x, mut sum_y) = (0.0, 0.0);
    for &i in indices {
        let tx = &dataset.transactions[i];
        sum_x += tx.floor_area_sqm;
        sum_y += tx.resale_price;
    }
    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for &i in indices {
        let tx = &dataset.transactions[i];
        let dx = tx.floor_area_sqm - mean_x;
        sxx += dx * dx;
        sxy += dx * (tx.resale_price - mean_y);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
