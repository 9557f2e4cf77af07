use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Transaction – one row of the resale dataset
// ---------------------------------------------------------------------------

/// A single resale transaction (one CSV row).
///
/// The input file may carry more columns than these; anything beyond the
/// five required fields is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub year: i32,
    pub town: String,
    pub flat_type: String,
    pub floor_area_sqm: f64,
    pub resale_price: f64,
}

// ---------------------------------------------------------------------------
// ResaleDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column indices.
///
/// Immutable after construction: filtering produces index lists into
/// `transactions`, never a mutated copy.
#[derive(Debug, Clone)]
pub struct ResaleDataset {
    /// All transactions in file order.
    pub transactions: Vec<Transaction>,
    /// Sorted distinct `flat_type` values.
    pub flat_types: BTreeSet<String>,
    /// Sorted distinct `town` values.
    pub towns: BTreeSet<String>,
    year_min: i32,
    year_max: i32,
}

impl ResaleDataset {
    /// Build the distinct-value indices from the loaded rows.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let mut flat_types = BTreeSet::new();
        let mut towns = BTreeSet::new();
        let mut year_min = i32::MAX;
        let mut year_max = i32::MIN;

        for tx in &transactions {
            flat_types.insert(tx.flat_type.clone());
            towns.insert(tx.town.clone());
            year_min = year_min.min(tx.year);
            year_max = year_max.max(tx.year);
        }

        ResaleDataset {
            transactions,
            flat_types,
            towns,
            year_min,
            year_max,
        }
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Inclusive `(min, max)` of the `year` column, `None` for an empty table.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        if self.is_empty() {
            None
        } else {
            Some((self.year_min, self.year_max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(year: i32, town: &str, flat_type: &str) -> Transaction {
        Transaction {
            year,
            town: town.to_string(),
            flat_type: flat_type.to_string(),
            floor_area_sqm: 70.0,
            resale_price: 400_000.0,
        }
    }

    #[test]
    fn indices_are_sorted_and_deduplicated() {
        let ds = ResaleDataset::from_transactions(vec![
            tx(2019, "YISHUN", "4 ROOM"),
            tx(2015, "BEDOK", "3 ROOM"),
            tx(2021, "BEDOK", "4 ROOM"),
        ]);

        let towns: Vec<&str> = ds.towns.iter().map(String::as_str).collect();
        let types: Vec<&str> = ds.flat_types.iter().map(String::as_str).collect();
        assert_eq!(towns, ["BEDOK", "YISHUN"]);
        assert_eq!(types, ["3 ROOM", "4 ROOM"]);
        assert_eq!(ds.year_bounds(), Some((2015, 2021)));
    }

    #[test]
    fn empty_dataset_has_no_year_bounds() {
        let ds = ResaleDataset::from_transactions(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_bounds(), None);
    }
}
