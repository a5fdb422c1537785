//! Persisted aggregate record.
//!
//! # Responsibility
//! - Define the single stored object: configuration, notes and goals.
//! - Encode/decode the JSON wire shape, healing malformed input.
//!
//! # Invariants
//! - Stored notes never contain empty annotations (see [`Annotation::is_empty`]).
//! - Goal ids are the keys of [`GoalMap`]; they are not repeated inside entries.
//! - Goal completions are scoped by calendar year.
//! - Decoding never fails outward; it falls back to defaults field by field.

use crate::calendar::math::days_in_year;
use crate::model::config::{default_birthdate, DEFAULT_LIFE_EXPECTANCY};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Index of one unit (week or day) inside a generated sequence.
pub type UnitIndex = u32;
/// Stable goal identifier.
pub type GoalId = String;
/// Sparse mapping from week index to annotation.
pub type NoteMap = BTreeMap<UnitIndex, Annotation>;
/// Mapping from goal id to goal.
pub type GoalMap = BTreeMap<GoalId, Goal>;
/// Year -> completed day indices (0-based day of year).
pub type CompletedDays = BTreeMap<i32, BTreeSet<UnitIndex>>;

/// Free-text note attached to one week, optionally marking a life event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Present only for life events.
    #[serde(rename = "eventName", default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

impl Annotation {
    /// Builds an annotation; empty optional strings are treated as absent.
    pub fn new(
        text: impl Into<String>,
        category: Option<String>,
        event_name: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.filter(|value| !value.is_empty()),
            event_name: event_name.filter(|value| !value.is_empty()),
        }
    }

    /// Blank text and no event name: equivalent to "no annotation".
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.event_name.is_none()
    }

    pub fn is_life_event(&self) -> bool {
        self.event_name.is_some()
    }
}

/// User-defined daily goal with completions recorded per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub color: String,
    #[serde(rename = "completedDays", default)]
    pub completed_days: CompletedDays,
}

impl Goal {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            completed_days: CompletedDays::new(),
        }
    }

    pub fn is_completed(&self, year: i32, day_index: UnitIndex) -> bool {
        self.completed_days
            .get(&year)
            .is_some_and(|days| days.contains(&day_index))
    }

    /// Number of completed days recorded for `year`.
    pub fn completed_count(&self, year: i32) -> usize {
        self.completed_days.get(&year).map_or(0, BTreeSet::len)
    }
}

/// Single stored object holding configuration plus all annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    #[serde(with = "iso_birthdate")]
    pub birthdate: NaiveDate,
    #[serde(rename = "lifeExpectancy")]
    pub life_expectancy: u32,
    #[serde(default)]
    pub notes: NoteMap,
    #[serde(default, skip_serializing_if = "GoalMap::is_empty")]
    pub goals: GoalMap,
}

impl Default for CalendarRecord {
    fn default() -> Self {
        Self {
            birthdate: default_birthdate(),
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            notes: NoteMap::new(),
            goals: GoalMap::new(),
        }
    }
}

impl CalendarRecord {
    /// Serializes this record into its stored JSON text.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes stored JSON text, substituting defaults for anything malformed.
    ///
    /// Rules:
    /// - Unparseable text or a non-object yields [`CalendarRecord::default`].
    /// - An invalid `birthdate` or `lifeExpectancy` falls back to that
    ///   field's default only.
    /// - Note entries with non-numeric keys, wrong shape or empty content
    ///   are dropped.
    /// - Goal entries without a string `name` and `color` are dropped.
    ///   Completions that are not year-keyed, days outside their year and
    ///   empty year buckets are removed from kept goals.
    pub fn decode_lenient(raw: &str) -> Self {
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=record_decode module=model status=healed reason=unparseable error={err}");
                return Self::default();
            }
        };
        let Value::Object(fields) = value else {
            warn!("event=record_decode module=model status=healed reason=not_object");
            return Self::default();
        };

        let defaults = Self::default();
        let birthdate = fields
            .get("birthdate")
            .and_then(Value::as_str)
            .and_then(parse_birthdate)
            .unwrap_or_else(|| {
                warn!("event=record_decode module=model status=healed field=birthdate");
                defaults.birthdate
            });
        let life_expectancy = fields
            .get("lifeExpectancy")
            .and_then(Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
            .filter(|value| *value > 0)
            .unwrap_or_else(|| {
                warn!("event=record_decode module=model status=healed field=lifeExpectancy");
                defaults.life_expectancy
            });

        Self {
            birthdate,
            life_expectancy,
            notes: decode_notes(fields.get("notes")),
            goals: decode_goals(fields.get("goals")),
        }
    }
}

fn decode_notes(value: Option<&Value>) -> NoteMap {
    let Some(entries) = value.and_then(Value::as_object) else {
        return NoteMap::new();
    };

    let mut notes = NoteMap::new();
    let mut dropped = 0usize;
    for (key, entry) in entries {
        let decoded = key.parse::<UnitIndex>().ok().and_then(|index| {
            serde_json::from_value::<Annotation>(entry.clone())
                .ok()
                .map(|raw| (index, Annotation::new(raw.text, raw.category, raw.event_name)))
        });
        match decoded {
            Some((index, annotation)) if !annotation.is_empty() => {
                notes.insert(index, annotation);
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!("event=record_decode module=model status=healed field=notes dropped={dropped}");
    }
    notes
}

fn decode_goals(value: Option<&Value>) -> GoalMap {
    let Some(entries) = value.and_then(Value::as_object) else {
        return GoalMap::new();
    };

    let mut goals = GoalMap::new();
    let mut dropped = 0usize;
    for (id, entry) in entries {
        match decode_goal(entry) {
            Some(goal) if !id.is_empty() => {
                goals.insert(id.clone(), goal);
            }
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!("event=record_decode module=model status=healed field=goals dropped={dropped}");
    }
    goals
}

/// Keeps a goal whenever `name` and `color` are strings.
///
/// Completions that are not a year-keyed object (such as a flat day list)
/// are discarded, as are day indices that do not exist in their year.
fn decode_goal(entry: &Value) -> Option<Goal> {
    let fields = entry.as_object()?;
    let name = fields.get("name")?.as_str()?;
    let color = fields.get("color")?.as_str()?;
    let mut goal = Goal::new(name, color);

    match fields.get("completedDays") {
        None | Some(Value::Null) => {}
        Some(raw) => match serde_json::from_value::<CompletedDays>(raw.clone()) {
            Ok(days) => goal.completed_days = days,
            Err(_) => {
                warn!("event=record_decode module=model status=healed field=completedDays reason=not_year_scoped");
            }
        },
    }

    let mut out_of_range = 0usize;
    goal.completed_days.retain(|year, days| {
        let limit = days_in_year(*year);
        let before = days.len();
        days.retain(|day| *day < limit);
        out_of_range += before - days.len();
        !days.is_empty()
    });
    if out_of_range > 0 {
        warn!("event=record_decode module=model status=healed field=completedDays dropped={out_of_range}");
    }
    Some(goal)
}

/// Parses a stored birthdate.
///
/// Accepts an RFC 3339 date-time (mapped to the local calendar date) or a
/// bare `YYYY-MM-DD` date.
pub fn parse_birthdate(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Formats a birthdate as the UTC instant of its local midnight.
pub fn format_birthdate(date: NaiveDate) -> String {
    let midnight = date.and_time(NaiveTime::MIN);
    // Local midnight can fall inside a DST gap; the next hour always exists.
    let instant = Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight));
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

mod iso_birthdate {
    use super::{format_birthdate, parse_birthdate};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_birthdate(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_birthdate(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid birthdate `{raw}`")))
    }
}
