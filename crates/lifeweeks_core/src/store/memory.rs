//! In-process store holding the serialized record.

use super::{CalendarStore, StoreResult};
use crate::model::record::CalendarRecord;

/// Keeps the encoded JSON text, so load goes through the same decoder as
/// durable stores.
#[derive(Debug, Clone, Default)]
pub struct MemoryCalendarStore {
    raw: Option<String>,
}

impl MemoryCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from arbitrary stored text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// Currently stored text, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl CalendarStore for MemoryCalendarStore {
    fn load(&self) -> CalendarRecord {
        self.raw
            .as_deref()
            .map(CalendarRecord::decode_lenient)
            .unwrap_or_default()
    }

    fn save(&mut self, record: &CalendarRecord) -> StoreResult<()> {
        self.raw = Some(record.encode()?);
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.raw = None;
        Ok(())
    }
}
