//! Scheduling-conflict queries for event placement.
//!
//! A conflict is two events sharing the same calendar day and the same
//! non-empty clock time. The detector only reports; whether to proceed
//! despite a conflict is the caller's decision. Checks run against events'
//! own anchor placements only, never against generated recurring
//! occurrences.

use crate::error::{EngineError, EngineResult};
use chrono::{NaiveDate, NaiveTime};
use koyomi_core::event::Event;

/// A candidate placement: the fields of a create, edit, or move that
/// matter for conflict detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub title: String,
}

impl Candidate {
    #[must_use]
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, title: impl Into<String>) -> Self {
        Self {
            date,
            time,
            title: title.into(),
        }
    }

    /// ## Summary
    /// Derives the candidate for relocating an existing event to
    /// `new_date`, keeping its time and title.
    ///
    /// ## Errors
    /// Returns `NotFound` when `event_id` is not in `events`.
    pub fn for_move(events: &[Event], event_id: &str, new_date: NaiveDate) -> EngineResult<Self> {
        let moved = events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or_else(|| EngineError::NotFound(format!("event {event_id}")))?;
        Ok(Self::new(new_date, moved.time, moved.title.clone()))
    }
}

/// ## Summary
/// Finds events colliding with `candidate`: same day, same non-empty time,
/// id different from `exclude_id`.
///
/// A candidate without a time never conflicts, and neither does an event
/// without one; all-day events collide with nothing on time grounds.
#[must_use]
pub fn find_conflicts<'a>(
    candidate: &Candidate,
    events: &'a [Event],
    exclude_id: Option<&str>,
) -> Vec<&'a Event> {
    collect_conflicts(candidate, events, exclude_id, false)
}

/// Stricter variant of [`find_conflicts`] that additionally requires the
/// same title. Consumers use it to pick a more specific warning when both
/// predicates fire.
#[must_use]
pub fn find_name_conflicts<'a>(
    candidate: &Candidate,
    events: &'a [Event],
    exclude_id: Option<&str>,
) -> Vec<&'a Event> {
    collect_conflicts(candidate, events, exclude_id, true)
}

fn collect_conflicts<'a>(
    candidate: &Candidate,
    events: &'a [Event],
    exclude_id: Option<&str>,
    require_same_title: bool,
) -> Vec<&'a Event> {
    let Some(time) = candidate.time else {
        return Vec::new();
    };

    events
        .iter()
        .filter(|event| exclude_id != Some(event.id.as_str()))
        .filter(|event| event.date == candidate.date && event.time == Some(time))
        .filter(|event| !require_same_title || event.title == candidate.title)
        .collect()
}

/// Both conflict sets for one candidate, computed independently.
///
/// `same_name_and_time` is always a subset of `same_time`; same-time-only
/// conflicts are still reported even when no same-name conflict exists.
#[derive(Debug)]
pub struct ConflictReport<'a> {
    pub same_time: Vec<&'a Event>,
    pub same_name_and_time: Vec<&'a Event>,
}

impl<'a> ConflictReport<'a> {
    /// Runs both conflict predicates for `candidate` against `events`.
    #[must_use]
    pub fn check(candidate: &Candidate, events: &'a [Event], exclude_id: Option<&str>) -> Self {
        let report = Self {
            same_time: find_conflicts(candidate, events, exclude_id),
            same_name_and_time: find_name_conflicts(candidate, events, exclude_id),
        };
        tracing::debug!(
            date = %candidate.date,
            same_time = report.same_time.len(),
            same_name_and_time = report.same_name_and_time.len(),
            "checked placement for conflicts"
        );
        report
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.same_time.is_empty() && self.same_name_and_time.is_empty()
    }

    /// The warning to show the user, most specific first. `None` when the
    /// placement is conflict-free; the caller decides whether to proceed.
    #[must_use]
    pub fn warning_message(&self) -> Option<&'static str> {
        match (
            self.same_name_and_time.is_empty(),
            self.same_time.is_empty(),
        ) {
            (false, _) => Some(
                "An event with the same name and time already exists on this date. \
                 Do you want to continue?",
            ),
            (true, false) => Some(
                "An event with the same time already exists on this date. \
                 Do you want to continue?",
            ),
            (true, true) => None,
        }
    }
}
