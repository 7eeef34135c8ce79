//! Core data model for the koyomi calendar engine.
//!
//! Defines events, recurrence rules, derived occurrences, and the shared
//! error and constant types. Contains no date-scanning logic; evaluation
//! lives in `koyomi-engine`.

pub mod constants;
pub mod error;
pub mod event;
pub mod recurrence;
pub mod types;
