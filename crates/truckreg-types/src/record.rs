//! Records persisted to the backing tables
//!
//! Serde renames carry the exact CSV column headers, spaces and
//! apostrophes included, so the field names stay idiomatic Rust.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique login name, also the table key
    #[serde(rename = "Username")]
    pub username: String,

    /// SHA-256 digest of the password, 64-char lowercase hex
    #[serde(rename = "Password")]
    pub password_hash: String,
}

/// A truck registered by a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckRecord {
    /// Unique truck number, also the table key
    #[serde(rename = "Truck Number")]
    pub truck_number: String,

    #[serde(rename = "Driver's Name")]
    pub driver_name: String,

    #[serde(rename = "Contact Number")]
    pub contact_number: String,

    /// Stored as ISO `YYYY-MM-DD`
    #[serde(rename = "Registration Date")]
    pub registration_date: NaiveDate,

    /// Username of the account that registered the truck.
    /// Not checked against the user table.
    #[serde(rename = "Username")]
    pub owner_username: String,
}
