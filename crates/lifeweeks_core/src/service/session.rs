//! Calendar session: the single owner of mutable calendar state.
//!
//! # Invariants
//! - Every successful mutation saves the whole record before returning.
//! - A failed save leaves the in-memory record unchanged.
//! - Views are recomputed from the record on every call.

use crate::annotation::goals::{add_goal, palette_color, remove_goal, toggle_goal_day};
use crate::annotation::notes::{delete_note, life_events, set_note};
use crate::annotation::AnnotationError;
use crate::calendar::clock::Clock;
use crate::calendar::sequence::{
    generate_day_sequence, generate_goal_day_sequence, generate_week_sequence,
};
use crate::calendar::stats::{GoalProgress, LifeStats, YearStats};
use crate::model::config::{ConfigError, LifeConfig};
use crate::model::record::{Annotation, CalendarRecord, GoalId, UnitIndex};
use crate::model::unit::{DayUnit, GoalDayUnit, WeekUnit};
use crate::store::{CalendarStore, StoreError};
use chrono::NaiveDate;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from session operations.
#[derive(Debug)]
pub enum SessionError {
    /// Rejected birthdate/life expectancy input.
    Config(ConfigError),
    /// Rejected note or goal operation.
    Annotation(AnnotationError),
    /// Storage medium failure.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Annotation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Annotation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<AnnotationError> for SessionError {
    fn from(value: AnnotationError) -> Self {
        Self::Annotation(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session facade over a store and a clock.
pub struct CalendarSession<S: CalendarStore, C: Clock> {
    store: S,
    clock: C,
    record: CalendarRecord,
}

impl<S: CalendarStore, C: Clock> CalendarSession<S, C> {
    /// Loads the stored record (or defaults) and starts a session.
    pub fn open(store: S, clock: C) -> Self {
        let record = store.load();
        info!(
            "event=session_open module=service status=ok notes={} goals={}",
            record.notes.len(),
            record.goals.len()
        );
        Self {
            store,
            clock,
            record,
        }
    }

    pub fn record(&self) -> &CalendarRecord {
        &self.record
    }

    /// Stored birthdate and life expectancy.
    pub fn config(&self) -> (NaiveDate, u32) {
        (self.record.birthdate, self.record.life_expectancy)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates and stores a new birthdate and life expectancy.
    ///
    /// Existing notes are kept even when they fall beyond the new lifespan.
    pub fn update_config(
        &mut self,
        birthdate: NaiveDate,
        life_expectancy: u32,
    ) -> SessionResult<LifeConfig> {
        let config = LifeConfig::new(birthdate, life_expectancy, self.clock.today())?;
        let mut next = self.record.clone();
        next.birthdate = config.birthdate();
        next.life_expectancy = config.life_expectancy();
        self.commit(next, "config_update")?;
        Ok(config)
    }

    /// Sets or clears the note at `index` (see [`set_note`]).
    pub fn set_note(
        &mut self,
        index: UnitIndex,
        text: impl Into<String>,
        category: Option<String>,
        event_name: Option<String>,
    ) -> SessionResult<()> {
        let mut next = self.record.clone();
        next.notes = set_note(&self.record.notes, index, text, category, event_name);
        self.commit(next, "note_set")
    }

    pub fn delete_note(&mut self, index: UnitIndex) -> SessionResult<()> {
        let mut next = self.record.clone();
        next.notes = delete_note(&self.record.notes, index);
        self.commit(next, "note_delete")
    }

    /// Adds a goal colored from the default palette.
    pub fn add_goal(&mut self, name: &str) -> SessionResult<GoalId> {
        let (goals, id) = add_goal(&self.record.goals, name, palette_color)?;
        let mut next = self.record.clone();
        next.goals = goals;
        self.commit(next, "goal_add")?;
        Ok(id)
    }

    pub fn remove_goal(&mut self, goal_id: &str) -> SessionResult<()> {
        let mut next = self.record.clone();
        next.goals = remove_goal(&self.record.goals, goal_id);
        self.commit(next, "goal_remove")
    }

    /// Toggles one day and returns whether it is now completed.
    pub fn toggle_goal_day(
        &mut self,
        goal_id: &str,
        year: i32,
        day_index: UnitIndex,
    ) -> SessionResult<bool> {
        let goals = toggle_goal_day(&self.record.goals, goal_id, year, day_index)?;
        let completed = goals
            .get(goal_id)
            .is_some_and(|goal| goal.is_completed(year, day_index));
        let mut next = self.record.clone();
        next.goals = goals;
        self.commit(next, "goal_toggle")?;
        Ok(completed)
    }

    /// Clears stored state and returns to defaults.
    pub fn reset(&mut self) -> SessionResult<()> {
        if let Err(err) = self.store.clear() {
            error!("event=session_reset module=service status=error error={err}");
            return Err(err.into());
        }
        self.record = CalendarRecord::default();
        info!("event=session_reset module=service status=ok");
        Ok(())
    }

    pub fn weeks(&self) -> Vec<WeekUnit> {
        generate_week_sequence(
            self.record.birthdate,
            self.record.life_expectancy,
            &self.record.notes,
            self.clock.now(),
        )
    }

    pub fn days(&self, year: i32) -> Vec<DayUnit> {
        generate_day_sequence(year, self.clock.now())
    }

    pub fn goal_days(&self, year: i32) -> Vec<GoalDayUnit> {
        generate_goal_day_sequence(year, self.clock.now(), &self.record.goals)
    }

    /// Life events inside the configured lifespan, ordered by week.
    pub fn life_events(&self) -> Vec<(UnitIndex, &Annotation)> {
        life_events(&self.record.notes, self.record.life_expectancy)
    }

    pub fn life_stats(&self) -> LifeStats {
        LifeStats::compute(
            self.record.birthdate,
            self.record.life_expectancy,
            self.clock.now(),
        )
    }

    pub fn year_stats(&self, year: i32) -> YearStats {
        YearStats::compute(year, self.clock.now())
    }

    pub fn goal_progress(&self, goal_id: &str, year: i32) -> SessionResult<GoalProgress> {
        let goal = self
            .record
            .goals
            .get(goal_id)
            .ok_or_else(|| AnnotationError::GoalNotFound(goal_id.to_string()))?;
        Ok(GoalProgress::compute(goal, year, self.clock.now()))
    }

    fn commit(&mut self, next: CalendarRecord, event: &'static str) -> SessionResult<()> {
        if let Err(err) = self.store.save(&next) {
            error!("event={event} module=service status=error error_code=store_save_failed error={err}");
            return Err(err.into());
        }
        self.record = next;
        info!(
            "event={event} module=service status=ok notes={} goals={}",
            self.record.notes.len(),
            self.record.goals.len()
        );
        Ok(())
    }
}
