//! SQLite-backed store: one row of the `kv_store` table per key.

use super::{CalendarStore, StoreResult, STORAGE_KEY};
use crate::model::record::CalendarRecord;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};

/// Store over a migrated connection (see [`crate::db::open_db`]).
pub struct SqliteCalendarStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteCalendarStore<'conn> {
    /// Uses the default [`STORAGE_KEY`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, STORAGE_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    fn read_raw(&self) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()
    }
}

impl CalendarStore for SqliteCalendarStore<'_> {
    fn load(&self) -> CalendarRecord {
        match self.read_raw() {
            Ok(Some(raw)) => CalendarRecord::decode_lenient(&raw),
            Ok(None) => {
                info!("event=store_load module=store status=ok source=default");
                CalendarRecord::default()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=healed error_code=store_read_failed error={err}"
                );
                CalendarRecord::default()
            }
        }
    }

    fn save(&mut self, record: &CalendarRecord) -> StoreResult<()> {
        let encoded = record.encode()?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), encoded],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM kv_store WHERE key = ?1;",
            params![self.key.as_str()],
        )?;
        Ok(())
    }
}
