//! Truck registration and per-user listing

use chrono::NaiveDate;
use log::info;
use truckreg_store::TruckStore;
use truckreg_types::{FormError, Result, TruckRecord};

/// Register a truck under `owner_username` and persist the full table.
///
/// Duplicate truck numbers are rejected rather than overwritten; records
/// are never updated or deleted once written.
pub fn register_truck(
    trucks: &mut TruckStore,
    truck_number: &str,
    driver_name: &str,
    contact_number: &str,
    registration_date: NaiveDate,
    owner_username: &str,
) -> Result<()> {
    if truck_number.is_empty() {
        return Err(FormError::MissingField("truck number").into());
    }
    if driver_name.is_empty() {
        return Err(FormError::MissingField("driver name").into());
    }
    if contact_number.is_empty() {
        return Err(FormError::MissingField("contact number").into());
    }
    if trucks.contains(truck_number) {
        return Err(FormError::DuplicateTruck.into());
    }

    trucks.insert(TruckRecord {
        truck_number: truck_number.to_string(),
        driver_name: driver_name.to_string(),
        contact_number: contact_number.to_string(),
        registration_date,
        owner_username: owner_username.to_string(),
    })?;
    info!("registered truck {} for {}", truck_number, owner_username);
    Ok(())
}

/// The trucks registered by `owner_username`, sorted by truck number
pub fn list_owned_trucks<'a>(trucks: &'a TruckStore, owner_username: &str) -> Vec<&'a TruckRecord> {
    trucks.owned_by(owner_username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn open_store(dir: &tempfile::TempDir) -> TruckStore {
        TruckStore::open(dir.path().join("truck_data.csv")).unwrap()
    }

    #[test]
    fn empty_required_field_is_rejected_and_not_persisted() {
        let dir = tempdir().unwrap();
        let mut trucks = open_store(&dir);
        let before = std::fs::read_to_string(trucks.path()).unwrap();

        for (number, driver, contact, field) in [
            ("", "Bob", "555-0100", "truck number"),
            ("TRK1", "", "555-0100", "driver name"),
            ("TRK1", "Bob", "", "contact number"),
        ] {
            let err =
                register_truck(&mut trucks, number, driver, contact, date(), "alice").unwrap_err();
            assert_eq!(err.as_form_error(), Some(&FormError::MissingField(field)));
        }

        assert_eq!(trucks.count(), 0);
        let after = std::fs::read_to_string(trucks.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_truck_number_is_rejected() {
        let dir = tempdir().unwrap();
        let mut trucks = open_store(&dir);

        register_truck(&mut trucks, "TRK1", "Bob", "555-0100", date(), "alice").unwrap();
        let err =
            register_truck(&mut trucks, "TRK1", "Eve", "555-0199", date(), "bob").unwrap_err();

        assert_eq!(err.as_form_error(), Some(&FormError::DuplicateTruck));
        assert_eq!(trucks.get("TRK1").unwrap().driver_name, "Bob");
    }

    #[test]
    fn listing_is_scoped_to_the_owner() {
        let dir = tempdir().unwrap();
        let mut trucks = open_store(&dir);

        register_truck(&mut trucks, "TRK1", "Bob", "555-0100", date(), "alice").unwrap();
        register_truck(&mut trucks, "TRK2", "Dan", "555-0101", date(), "bob").unwrap();

        let owned = list_owned_trucks(&trucks, "alice");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].truck_number, "TRK1");
        assert!(list_owned_trucks(&trucks, "carol").is_empty());
    }
}
