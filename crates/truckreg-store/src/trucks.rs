//! Truck registration table keyed by truck number

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::warn;
use truckreg_types::{StoreError, TruckRecord};

use crate::{replace_table, write_empty_table, TableNotice};

const HEADERS: [&str; 5] = [
    "Truck Number",
    "Driver's Name",
    "Contact Number",
    "Registration Date",
    "Username",
];

const KEY_COLUMN: &str = "Truck Number";

/// CSV-backed table of truck registrations
pub struct TruckStore {
    path: PathBuf,
    trucks: HashMap<String, TruckRecord>,
    notice: Option<TableNotice>,
}

impl TruckStore {
    /// Open the table at `path`, creating or rebuilding the file if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let (trucks, notice) = Self::load(&path)?;
        if let Some(ref notice) = notice {
            warn!("truck table {}: {}", path.display(), notice);
        }
        Ok(Self {
            path,
            trucks,
            notice,
        })
    }

    fn load(
        path: &Path,
    ) -> Result<(HashMap<String, TruckRecord>, Option<TableNotice>), StoreError> {
        if !path.exists() {
            write_empty_table(path, &HEADERS)?;
            return Ok((HashMap::new(), Some(TableNotice::Created)));
        }

        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            write_empty_table(path, &HEADERS)?;
            let notice = TableNotice::Rebuilt("table file is empty".to_string());
            return Ok((HashMap::new(), Some(notice)));
        }

        match Self::parse(&raw) {
            Ok(trucks) => Ok((trucks, None)),
            Err(reason) => {
                write_empty_table(path, &HEADERS)?;
                Ok((HashMap::new(), Some(TableNotice::Rebuilt(reason))))
            }
        }
    }

    /// Parse the raw table. A table without the key column or without any
    /// data rows is treated as corrupt, matching the load contract.
    fn parse(raw: &str) -> Result<HashMap<String, TruckRecord>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(raw.as_bytes());

        let headers = reader.headers().map_err(|e| e.to_string())?.clone();
        if !headers.iter().any(|h| h == KEY_COLUMN) {
            return Err(format!("missing required column: {}", KEY_COLUMN));
        }

        let mut trucks = HashMap::new();
        for (row_idx, result) in reader.deserialize::<TruckRecord>().enumerate() {
            // +2: rows are 0-based and the header is row 1
            let record = result.map_err(|e| format!("row {}: {}", row_idx + 2, e))?;
            trucks.insert(record.truck_number.clone(), record);
        }

        if trucks.is_empty() {
            return Err("table has no rows".to_string());
        }
        Ok(trucks)
    }

    /// Rewrite the backing file with the full table
    fn save(&self) -> Result<(), StoreError> {
        let mut rows: Vec<&TruckRecord> = self.trucks.values().collect();
        rows.sort_by(|a, b| a.truck_number.cmp(&b.truck_number));
        replace_table(&self.path, &HEADERS, &rows)
    }

    /// Insert a record and persist the full table
    pub fn insert(&mut self, record: TruckRecord) -> Result<(), StoreError> {
        self.trucks.insert(record.truck_number.clone(), record);
        self.save()
    }

    pub fn contains(&self, truck_number: &str) -> bool {
        self.trucks.contains_key(truck_number)
    }

    pub fn get(&self, truck_number: &str) -> Option<&TruckRecord> {
        self.trucks.get(truck_number)
    }

    pub fn count(&self) -> usize {
        self.trucks.len()
    }

    /// Records owned by `owner_username`, sorted by truck number
    pub fn owned_by(&self, owner_username: &str) -> Vec<&TruckRecord> {
        let mut records: Vec<_> = self
            .trucks
            .values()
            .filter(|r| r.owner_username == owner_username)
            .collect();
        records.sort_by(|a, b| a.truck_number.cmp(&b.truck_number));
        records
    }

    /// All records sorted by truck number
    pub fn records(&self) -> Vec<&TruckRecord> {
        let mut records: Vec<_> = self.trucks.values().collect();
        records.sort_by(|a, b| a.truck_number.cmp(&b.truck_number));
        records
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recovery notice from `open`, if the file had to be created or rebuilt
    pub fn take_notice(&mut self) -> Option<TableNotice> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(number: &str, owner: &str) -> TruckRecord {
        TruckRecord {
            truck_number: number.to_string(),
            driver_name: "Bob".to_string(),
            contact_number: "555-0100".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            owner_username: owner.to_string(),
        }
    }

    #[test]
    fn open_creates_missing_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_data.csv");

        let mut store = TruckStore::open(&path).unwrap();

        assert_eq!(store.take_notice(), Some(TableNotice::Created));
        assert_eq!(store.count(), 0);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("Truck Number,Driver's Name,Contact Number"));
    }

    #[test]
    fn header_only_table_is_rebuilt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_data.csv");

        // A table with headers but no rows counts as corrupt
        let header = "Truck Number,Driver's Name,Contact Number,Registration Date,Username\n";
        std::fs::write(&path, header).unwrap();

        let mut store = TruckStore::open(&path).unwrap();
        assert!(matches!(
            store.take_notice(),
            Some(TableNotice::Rebuilt(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn missing_key_column_is_rebuilt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_data.csv");
        std::fs::write(&path, "Plate,Driver\nTRK1,Bob\n").unwrap();

        let mut store = TruckStore::open(&path).unwrap();
        assert!(matches!(
            store.take_notice(),
            Some(TableNotice::Rebuilt(_))
        ));
    }

    #[test]
    fn save_then_load_preserves_all_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_data.csv");

        let mut store = TruckStore::open(&path).unwrap();
        store.insert(record("TRK1", "alice")).unwrap();

        let reopened = TruckStore::open(&path).unwrap();
        assert_eq!(reopened.get("TRK1"), Some(&record("TRK1", "alice")));
    }

    #[test]
    fn owned_by_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truck_data.csv");

        let mut store = TruckStore::open(&path).unwrap();
        store.insert(record("TRK2", "alice")).unwrap();
        store.insert(record("TRK1", "alice")).unwrap();
        store.insert(record("TRK3", "bob")).unwrap();

        let owned = store.owned_by("alice");
        let numbers: Vec<_> = owned.iter().map(|r| r.truck_number.as_str()).collect();
        assert_eq!(numbers, ["TRK1", "TRK2"]);
        assert!(store.owned_by("carol").is_empty());
    }
}
