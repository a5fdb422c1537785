//! Unit counting and classification.
//!
//! Lived counts are signed: a reference time before the start date yields a
//! negative count, which classifies every unit as future. Callers that
//! display a count clamp it at zero.

use crate::model::record::UnitIndex;
use crate::model::unit::UnitStatus;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Weeks per life-year in the grid.
pub const WEEKS_PER_YEAR: u32 = 52;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Complete weeks elapsed between `birthdate` (midnight) and `now`.
///
/// Floors toward negative infinity, so a `now` one second before the
/// birthdate yields `-1`.
pub fn lived_weeks(birthdate: NaiveDate, now: NaiveDateTime) -> i64 {
    elapsed_seconds(birthdate, now).div_euclid(SECONDS_PER_WEEK)
}

/// Complete days elapsed between `start` (midnight) and `now`.
pub fn lived_days(start: NaiveDate, now: NaiveDateTime) -> i64 {
    elapsed_seconds(start, now).div_euclid(SECONDS_PER_DAY)
}

fn elapsed_seconds(start: NaiveDate, now: NaiveDateTime) -> i64 {
    (now - start.and_time(NaiveTime::MIN)).num_seconds()
}

/// `life_expectancy * 52`.
pub fn total_weeks(life_expectancy: u32) -> u64 {
    u64::from(life_expectancy) * u64::from(WEEKS_PER_YEAR)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days of `year` already lived at `now`.
///
/// - Past year: the full year length.
/// - Future year: `0`.
/// - Current year: complete days since Jan 1.
pub fn lived_days_in_year(year: i32, now: NaiveDateTime) -> i64 {
    let current_year = now.year();
    if year < current_year {
        i64::from(days_in_year(year))
    } else if year > current_year {
        0
    } else {
        i64::from(now.ordinal0())
    }
}

/// Days of `year` reached at `now`, the current day included.
pub fn reached_days_in_year(year: i32, now: NaiveDateTime) -> u32 {
    match year.cmp(&now.year()) {
        std::cmp::Ordering::Less => days_in_year(year),
        std::cmp::Ordering::Equal => now.ordinal(),
        std::cmp::Ordering::Greater => 0,
    }
}

/// `past` below the lived count, `current` at it, `future` above it.
pub fn unit_status(index: UnitIndex, lived: i64) -> UnitStatus {
    let index = i64::from(index);
    if index < lived {
        UnitStatus::Past
    } else if index == lived {
        UnitStatus::Current
    } else {
        UnitStatus::Future
    }
}

/// `min(100, 100 * lived / total)`, with negative `lived` read as zero.
///
/// `total == 0` is a caller error; it returns `0.0` instead of dividing.
pub fn progress_percentage(lived: i64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let lived = lived.max(0) as f64;
    (100.0 * lived / total as f64).min(100.0)
}

/// Start date of week `index`: `birthdate + index * 7 days`.
pub fn week_date(birthdate: NaiveDate, index: UnitIndex) -> Option<NaiveDate> {
    birthdate.checked_add_days(Days::new(u64::from(index) * 7))
}

/// Date of day `index` (0-based) in `year`, when it exists.
pub fn day_date(year: i32, index: UnitIndex) -> Option<NaiveDate> {
    if index >= days_in_year(year) {
        return None;
    }
    NaiveDate::from_yo_opt(year, index + 1)
}

/// 52-week years completed before week `index`.
pub fn year_offset(index: UnitIndex) -> u32 {
    index / WEEKS_PER_YEAR
}

/// 1-based position of week `index` within its 52-week year.
pub fn week_in_year(index: UnitIndex) -> u32 {
    index % WEEKS_PER_YEAR + 1
}

/// Quarter label for a calendar month (1-12).
pub fn quarter_label(month: u32) -> &'static str {
    match month {
        0..=3 => "Q1",
        4..=6 => "Q2",
        7..=9 => "Q3",
        _ => "Q4",
    }
}
