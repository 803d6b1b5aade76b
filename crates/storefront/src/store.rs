//! JSON record stores
//!
//! Each collection lives in a single JSON file holding an array of records.
//! The ranking code never touches the file; it goes through [`RecordStore`].

use crate::prelude::*;
use std::fs;
use std::path::PathBuf;
use storefront_core::records::{sort_records, CatalogRecord};

pub trait RecordStore {
    /// Load the full record collection.
    fn load(&self) -> Result<Vec<CatalogRecord>, Error>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[CatalogRecord]) -> Result<(), Error>;

    /// Human-readable location, used in messages.
    fn describe(&self) -> String;
}

/// Store backed by a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_error(&self, reason: impl ToString) -> Error {
        Error::StoreWrite {
            path: self.describe(),
            reason: reason.to_string(),
        }
    }
}

/// Serialize records in on-disk order with a trailing newline.
pub fn render_records(records: &[CatalogRecord]) -> Result<String, serde_json::Error> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);

    let mut json = serde_json::to_string_pretty(&sorted)?;
    json.push('\n');
    Ok(json)
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<CatalogRecord>, Error> {
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::StoreRead {
            path: self.describe(),
            reason: e.to_string(),
        })?;

        let records: Vec<CatalogRecord> =
            serde_json::from_str(&contents).map_err(|e| Error::InvalidData {
                path: self.describe(),
                reason: e.to_string(),
            })?;

        log::debug!("Loaded {} records from {}", records.len(), self.describe());
        Ok(records)
    }

    fn save(&self, records: &[CatalogRecord]) -> Result<(), Error> {
        let json = render_records(records).map_err(|e| self.write_error(e))?;

        // Write next to the target and rename so a failed write never truncates it.
        let staging = PathBuf::from(format!("{}.tmp", self.path.display()));
        fs::write(&staging, json).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(self.write_error(e));
        }

        log::info!("Saved {} records to {}", records.len(), self.describe());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;

    /// In-memory store for exercising the edit flow without touching disk.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub records: RefCell<Vec<CatalogRecord>>,
        pub saves: RefCell<usize>,
    }

    impl MemoryStore {
        pub fn new(records: Vec<CatalogRecord>) -> Self {
            Self {
                records: RefCell::new(records),
                saves: RefCell::new(0),
            }
        }
    }

    impl RecordStore for MemoryStore {
        fn load(&self) -> Result<Vec<CatalogRecord>, Error> {
            Ok(self.records.borrow().clone())
        }

        fn save(&self, records: &[CatalogRecord]) -> Result<(), Error> {
            *self.records.borrow_mut() = records.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }
}
