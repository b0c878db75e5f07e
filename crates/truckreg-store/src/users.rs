//! User account table keyed by username

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::warn;
use truckreg_types::{StoreError, UserAccount};

use crate::{replace_table, write_empty_table, TableNotice};

const HEADERS: [&str; 2] = ["Username", "Password"];

/// CSV-backed table of user accounts
pub struct UserStore {
    path: PathBuf,
    accounts: HashMap<String, UserAccount>,
    notice: Option<TableNotice>,
}

impl UserStore {
    /// Open the table at `path`, creating or rebuilding the file if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let (accounts, notice) = Self::load(&path)?;
        if let Some(ref notice) = notice {
            warn!("user table {}: {}", path.display(), notice);
        }
        Ok(Self {
            path,
            accounts,
            notice,
        })
    }

    fn load(
        path: &Path,
    ) -> Result<(HashMap<String, UserAccount>, Option<TableNotice>), StoreError> {
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
            Ok(accounts) => Ok((accounts, None)),
            Err(reason) => {
                write_empty_table(path, &HEADERS)?;
                Ok((HashMap::new(), Some(TableNotice::Rebuilt(reason))))
            }
        }
    }

    fn parse(raw: &str) -> Result<HashMap<String, UserAccount>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(raw.as_bytes());

        let mut accounts = HashMap::new();
        for (row_idx, result) in reader.deserialize::<UserAccount>().enumerate() {
            // +2: rows are 0-based and the header is row 1
            let account = result.map_err(|e| format!("row {}: {}", row_idx + 2, e))?;
            accounts.insert(account.username.clone(), account);
        }
        Ok(accounts)
    }

    /// Rewrite the backing file with the full table
    fn save(&self) -> Result<(), StoreError> {
        let mut rows: Vec<&UserAccount> = self.accounts.values().collect();
        rows.sort_by(|a, b| a.username.cmp(&b.username));
        replace_table(&self.path, &HEADERS, &rows)
    }

    /// Insert an account and persist the full table
    pub fn insert(&mut self, account: UserAccount) -> Result<(), StoreError> {
        self.accounts.insert(account.username.clone(), account);
        self.save()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.get(username)
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// All accounts sorted by username
    pub fn accounts(&self) -> Vec<&UserAccount> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));
        accounts
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recovery notice from `open`, if the file had to be created or rebuilt
    pub fn take_notice(&mut self) -> Option<TableNotice> {
        self.notice.take()
    }
}
