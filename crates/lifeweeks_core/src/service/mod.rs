//! Session orchestration.
//!
//! # Responsibility
//! - Own the in-memory calendar record for one session.
//! - Route mutations through annotation rules and persist after each one.
//!
//! # See also
//! - `store` for the persistence boundary.

pub mod session;
