//! Eager unit sequences for the life, year and goal views.
//!
//! # Invariants
//! - Week sequences have `total_weeks(life_expectancy)` entries, day
//!   sequences `days_in_year(year)` entries, indexed `0..N`.
//! - At most one unit is `current`; none when the lived count is outside
//!   `[0, N)`.
//! - Notes whose index is beyond the sequence are ignored, not removed.

use crate::calendar::math::{
    day_date, days_in_year, lived_days_in_year, lived_weeks, total_weeks, unit_status,
    week_date, week_in_year, year_offset,
};
use crate::model::record::{GoalMap, NoteMap, UnitIndex};
use crate::model::unit::{AsDay, DayUnit, GoalDayUnit, WeekUnit};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// How the goal view partitions a year of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayGrouping {
    /// Twelve groups, one per calendar month.
    Months,
    /// Four groups, one per quarter.
    Quarters,
    /// Consecutive runs of seven days starting at Jan 1.
    Weeks,
}

/// Builds the life grid: one entry per week of the assumed lifespan.
///
/// A zero `life_expectancy` yields an empty sequence.
pub fn generate_week_sequence(
    birthdate: NaiveDate,
    life_expectancy: u32,
    notes: &NoteMap,
    now: NaiveDateTime,
) -> Vec<WeekUnit> {
    let lived = lived_weeks(birthdate, now);
    (0..total_weeks(life_expectancy))
        .map_while(|raw| {
            let index = UnitIndex::try_from(raw).ok()?;
            Some(WeekUnit {
                index,
                year_offset: year_offset(index),
                position_in_year: week_in_year(index),
                status: unit_status(index, lived),
                date: week_date(birthdate, index)?,
                annotation: notes.get(&index).cloned(),
            })
        })
        .collect()
}

/// Builds one entry per day of `year`; empty for years outside the
/// supported date range.
pub fn generate_day_sequence(year: i32, now: NaiveDateTime) -> Vec<DayUnit> {
    let lived = lived_days_in_year(year, now);
    (0..days_in_year(year))
        .map_while(|index| {
            let date = day_date(year, index)?;
            Some(DayUnit {
                index,
                position_in_year: index + 1,
                status: unit_status(index, lived),
                date,
                weekday: date.weekday().num_days_from_sunday(),
                month: date.month(),
                week_of_year: index / 7,
            })
        })
        .collect()
}

/// Day sequence for `year` with the ids of goals completed on each day.
pub fn generate_goal_day_sequence(
    year: i32,
    now: NaiveDateTime,
    goals: &GoalMap,
) -> Vec<GoalDayUnit> {
    generate_day_sequence(year, now)
        .into_iter()
        .map(|day| {
            let completed_goals = goals
                .iter()
                .filter(|(_, goal)| goal.is_completed(year, day.index))
                .map(|(id, _)| id.clone())
                .collect();
            GoalDayUnit {
                day,
                completed_goals,
            }
        })
        .collect()
}

/// Partitions a day sequence for display, preserving order within groups.
pub fn group_days<T: AsDay>(days: &[T], grouping: DayGrouping) -> Vec<Vec<&T>> {
    match grouping {
        DayGrouping::Months => bucket(days, 12, |day| day.month - 1),
        DayGrouping::Quarters => bucket(days, 4, |day| day.quarter() - 1),
        DayGrouping::Weeks => days.chunks(7).map(|run| run.iter().collect()).collect(),
    }
}

fn bucket<T: AsDay>(days: &[T], groups: usize, key: impl Fn(&DayUnit) -> u32) -> Vec<Vec<&T>> {
    let mut buckets: Vec<Vec<&T>> = (0..groups).map(|_| Vec::new()).collect();
    for unit in days {
        if let Some(slot) = buckets.get_mut(key(unit.as_day()) as usize) {
            slot.push(unit);
        }
    }
    buckets
}
