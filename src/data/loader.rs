use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;

use super::model::{ResaleDataset, Transaction};

/// Relative path the dashboard reads at startup.
pub const DEFAULT_DATA_PATH: &str = "singapore_cleaned.csv";

/// Header columns the input file must carry (exact-match, case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "year",
    "town",
    "flat_type",
    "floor_area_sqm",
    "resale_price",
];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// All errors produced while loading the dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read from disk.
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed delimited text.
    #[error("malformed CSV in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header row lacks one of the required columns.
    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read and parse the dataset from disk. One disk read per call.
///
/// The header is validated before any row is parsed so a missing column is
/// reported as such rather than as a per-row deserialization failure.
/// Columns beyond [`REQUIRED_COLUMNS`] are ignored.
pub fn load_csv(path: &Path) -> Result<ResaleDataset> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut transactions = Vec::new();
    for result in reader.deserialize::<Transaction>() {
        let tx = result.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        transactions.push(tx);
    }

    log::info!(
        "loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(ResaleDataset::from_transactions(transactions))
}

// ---------------------------------------------------------------------------
// Memoized entry point
// ---------------------------------------------------------------------------

type Cache = Mutex<BTreeMap<PathBuf, Arc<ResaleDataset>>>;

fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(BTreeMap::new()))
}

/// Load the dataset through a process-wide memoization map keyed by path.
///
/// The first call for a path reads the file; subsequent calls return the
/// cached table without touching the disk. Failed loads are not cached, so
/// a retry after fixing the file re-reads it. Invalidation is manual only,
/// via [`invalidate`].
pub fn load_cached(path: &Path) -> Result<Arc<ResaleDataset>> {
    if let Some(dataset) = cache().lock().expect("dataset cache poisoned").get(path) {
        log::debug!("cache hit for {}", path.display());
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(load_csv(path)?);
    cache()
        .lock()
        .expect("dataset cache poisoned")
        .insert(path.to_path_buf(), Arc::clone(&dataset));
    Ok(dataset)
}

/// Drop the cached table for `path`, forcing the next load to hit the disk.
pub fn invalidate(path: &Path) {
    cache()
        .lock()
        .expect("dataset cache poisoned")
        .remove(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "year,town,flat_type,floor_area_sqm,resale_price";

    fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{body}").unwrap();
        path
    }

    #[test]
    fn loads_well_formed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "ok.csv",
            &format!("{HEADER}\n2015,BEDOK,3 ROOM,65,300000\n2016,YISHUN,4 ROOM,90,350000"),
        );

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.transactions[0].town, "BEDOK");
        assert_eq!(ds.transactions[1].resale_price, 350_000.0);
        assert_eq!(ds.year_bounds(), Some((2015, 2016)));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "extra.csv",
            &format!("{HEADER},lease_commence_date\n2015,BEDOK,3 ROOM,65,300000,1980"),
        );

        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.transactions[0].floor_area_sqm, 65.0);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        match load_csv(&path) {
            Err(LoadError::FileAccess { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "short.csv",
            "year,town,flat_type,floor_area_sqm\n2015,BEDOK,3 ROOM,65",
        );
        match load_csv(&path) {
            Err(LoadError::MissingColumn { column, .. }) => {
                assert_eq!(column, "resale_price");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_row_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "bad_row.csv",
            &format!("{HEADER}\ntwenty-fifteen,BEDOK,3 ROOM,65,300000"),
        );
        assert!(matches!(load_csv(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn cached_load_skips_the_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "cached.csv",
            &format!("{HEADER}\n2015,BEDOK,3 ROOM,65,300000"),
        );

        let first = load_cached(&path).unwrap();
        assert_eq!(first.len(), 1);

        // Delete the file: a second load must come from the cache.
        std::fs::remove_file(&path).unwrap();
        let second = load_cached(&path).unwrap();
        assert_eq!(second.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));

        // After invalidation the disk read happens again and now fails.
        invalidate(&path);
        assert!(matches!(
            load_cached(&path),
            Err(LoadError::FileAccess { .. })
        ));
    }
}
