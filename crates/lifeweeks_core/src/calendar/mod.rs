//! Calendar arithmetic over a lifespan and a single year.
//!
//! # Responsibility
//! - Compute lived/total unit counts, statuses and progress.
//! - Generate eager week and day sequences for renderers.
//! - Provide the clock seam used to obtain "now".
//!
//! # Invariants
//! - Every function here is pure given its inputs; only [`clock::SystemClock`]
//!   reads ambient time.
//! - A lifespan is `life_expectancy * 52` weeks: a fixed approximation of
//!   the solar year, kept so total counts stay a round multiple of years.

pub mod clock;
pub mod math;
pub mod sequence;
pub mod stats;
