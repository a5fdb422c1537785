//! Derived unit descriptors consumed by renderers.
//!
//! # Invariants
//! - `index` is the position in the generated sequence and nothing else.
//! - Descriptors are recomputed from inputs; they are never stored.

use crate::model::record::{Annotation, GoalId, UnitIndex};
use chrono::NaiveDate;
use serde::Serialize;

/// Classification of a unit relative to the lived count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Past,
    Current,
    Future,
}

/// One week of the life grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekUnit {
    pub index: UnitIndex,
    /// Completed 52-week years before this week.
    pub year_offset: u32,
    /// 1-based week within its 52-week year.
    pub position_in_year: u32,
    pub status: UnitStatus,
    /// `birthdate + index * 7 days`.
    pub date: NaiveDate,
    pub annotation: Option<Annotation>,
}

impl WeekUnit {
    pub fn is_life_event(&self) -> bool {
        self.annotation
            .as_ref()
            .is_some_and(Annotation::is_life_event)
    }
}

/// One day of a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayUnit {
    /// 0-based day of year.
    pub index: UnitIndex,
    /// 1-based day of year.
    pub position_in_year: u32,
    pub status: UnitStatus,
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// `index / 7`; runs of seven starting at Jan 1, not ISO weeks.
    pub week_of_year: u32,
}

impl DayUnit {
    /// Quarter of the year, 1-4.
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }
}

/// A day of the goal view together with the goals completed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalDayUnit {
    pub day: DayUnit,
    pub completed_goals: Vec<GoalId>,
}

/// Access to the underlying day of a day-like descriptor.
pub trait AsDay {
    fn as_day(&self) -> &DayUnit;
}

impl AsDay for DayUnit {
    fn as_day(&self) -> &DayUnit {
        self
    }
}

impl AsDay for GoalDayUnit {
    fn as_day(&self) -> &DayUnit {
        &self.day
    }
}
