//! Recurrence evaluation and conflict detection for koyomi.
//!
//! Every operation in this crate is a pure, synchronous function of its
//! arguments: a per-day occurrence predicate, occurrence enumeration over a
//! window, next-occurrence lookup, human-readable rule labels, and conflict
//! queries against an event list. Nothing here mutates an event or holds
//! state between calls.

pub mod conflict;
pub mod error;
pub mod recurrence;
