//! Upsert/delete rules for notes and goals.
//!
//! # Responsibility
//! - Apply note and goal mutations as value-in, value-out functions.
//! - Keep stored maps free of empty entries.
//!
//! # Invariants
//! - Inputs are borrowed and never modified; callers receive a fresh map.
//! - No function here performs I/O; persisting the result is the caller's job.

use crate::model::record::{GoalId, UnitIndex};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goals;
pub mod notes;

pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// Rejected annotation/goal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    /// Operation targeted a goal id that is not in the map.
    GoalNotFound(GoalId),
    /// Goal name is empty after trimming.
    EmptyGoalName,
    /// Day index does not exist in the given year.
    DayOutOfRange { year: i32, day_index: UnitIndex },
}

impl Display for AnnotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalNotFound(id) => write!(f, "goal not found: {id}"),
            Self::EmptyGoalName => write!(f, "goal name cannot be empty"),
            Self::DayOutOfRange { year, day_index } => {
                write!(f, "day {day_index} does not exist in {year}")
            }
        }
    }
}

impl Error for AnnotationError {}
