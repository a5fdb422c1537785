//! Domain model for the life-in-weeks calendar.
//!
//! # Responsibility
//! - Define the persisted aggregate record and its annotation/goal entries.
//! - Define validated configuration and derived unit descriptors.
//!
//! # Invariants
//! - Unit descriptors are derived projections; they are never persisted.
//! - Notes and goals are sparse key-to-value maps, not positional arrays.

pub mod config;
pub mod record;
pub mod unit;
