//! Persistence boundary for the aggregate calendar record.
//!
//! # Responsibility
//! - Round-trip the single stored record to and from a storage medium.
//! - Self-heal missing or corrupt data on load.
//!
//! # Invariants
//! - `load` never fails outward; it returns defaults instead.
//! - `save` overwrites the whole record; there are no partial updates.
//! - After `clear`, `load` returns [`CalendarRecord::default`].

use crate::db::DbError;
use crate::model::record::CalendarRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

/// Fixed key under which the record is stored.
pub const STORAGE_KEY: &str = "life-calendar-data";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure writing to or clearing the storage medium.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode calendar record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Storage medium for the aggregate record.
pub trait CalendarStore {
    /// Returns the stored record, or defaults when absent or malformed.
    fn load(&self) -> CalendarRecord;
    /// Replaces the stored record.
    fn save(&mut self, record: &CalendarRecord) -> StoreResult<()>;
    /// Removes all stored state.
    fn clear(&mut self) -> StoreResult<()>;
}
