//! Core logic for the life-in-weeks calendar.
//! This crate is the single source of truth for calendar arithmetic and
//! annotation invariants; renderers consume the plain data it produces.

pub mod annotation;
pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use annotation::{AnnotationError, AnnotationResult};
pub use calendar::clock::{Clock, FixedClock, SystemClock};
pub use calendar::sequence::{
    generate_day_sequence, generate_goal_day_sequence, generate_week_sequence, group_days,
    DayGrouping,
};
pub use calendar::stats::{GoalProgress, LifeStats, YearStats};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::config::{ConfigError, LifeConfig, DEFAULT_LIFE_EXPECTANCY};
pub use model::record::{
    Annotation, CalendarRecord, CompletedDays, Goal, GoalId, GoalMap, NoteMap, UnitIndex,
};
pub use model::unit::{DayUnit, GoalDayUnit, UnitStatus, WeekUnit};
pub use service::session::{CalendarSession, SessionError, SessionResult};
pub use store::memory::MemoryCalendarStore;
pub use store::sqlite::SqliteCalendarStore;
pub use store::{CalendarStore, StoreError, StoreResult, STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
