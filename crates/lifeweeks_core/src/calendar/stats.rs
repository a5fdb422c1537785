//! Summary figures shown alongside the grids.

use crate::calendar::math::{
    days_in_year, lived_weeks, progress_percentage, reached_days_in_year, total_weeks,
    WEEKS_PER_YEAR,
};
use crate::model::record::Goal;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Life-view header figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeStats {
    /// Calendar years since birth, day of month ignored.
    pub age_years: i32,
    /// Months past the last year boundary, day of month ignored.
    pub age_months: u32,
    /// 1-based week within the current 52-week life-year.
    pub current_week: u32,
    /// Complete weeks lived, never negative.
    pub weeks_lived: u64,
    pub total_weeks: u64,
    pub weeks_remaining: u64,
    pub progress_percent: f64,
}

impl LifeStats {
    pub fn compute(birthdate: NaiveDate, life_expectancy: u32, now: NaiveDateTime) -> Self {
        let lived = lived_weeks(birthdate, now).max(0);
        let total = total_weeks(life_expectancy);
        let weeks_lived = lived.unsigned_abs();

        let mut age_years = now.year() - birthdate.year();
        let mut month_delta = now.month() as i32 - birthdate.month() as i32;
        if month_delta < 0 {
            age_years -= 1;
            month_delta += 12;
        }

        Self {
            age_years,
            age_months: month_delta.unsigned_abs(),
            current_week: (weeks_lived % u64::from(WEEKS_PER_YEAR)) as u32 + 1,
            weeks_lived,
            total_weeks: total,
            weeks_remaining: total.saturating_sub(weeks_lived),
            progress_percent: progress_percentage(lived, total),
        }
    }
}

/// Year-view footer figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearStats {
    pub year: i32,
    /// Days reached, today included: full length for a past year, `0` for a
    /// future one. The day sequence of a future year still marks index 0
    /// `current`, since its lived count is also zero.
    pub day_of_year: u32,
    pub total_days: u32,
    pub days_left: u32,
    pub progress_percent: f64,
}

impl YearStats {
    pub fn compute(year: i32, now: NaiveDateTime) -> Self {
        let total_days = days_in_year(year);
        let day_of_year = reached_days_in_year(year, now);
        Self {
            year,
            day_of_year,
            total_days,
            days_left: total_days.saturating_sub(day_of_year),
            progress_percent: progress_percentage(i64::from(day_of_year), u64::from(total_days)),
        }
    }
}

/// Completion figures for one goal within one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub year: i32,
    pub completed_days: u32,
    /// Days of the year elapsed so far, today included.
    pub elapsed_days: u32,
    pub completion_percent: f64,
}

impl GoalProgress {
    pub fn compute(goal: &Goal, year: i32, now: NaiveDateTime) -> Self {
        let completed_days = u32::try_from(goal.completed_count(year)).unwrap_or(u32::MAX);
        let elapsed_days = reached_days_in_year(year, now);
        let completion_percent = if elapsed_days == 0 {
            0.0
        } else {
            progress_percentage(i64::from(completed_days), u64::from(elapsed_days))
        };
        Self {
            year,
            completed_days,
            elapsed_days,
            completion_percent,
        }
    }
}
