//! Calendar events and their derived occurrences.
//!
//! ## Summary
//! `Event` is the persisted record: one anchor day plus an optional
//! recurrence rule. `Occurrence` is a derived per-day view of a repeating
//! event and is never stored. `EventDraft` carries raw form input and owns
//! identity assignment and validation when building an `Event`.

use crate::error::{CoreError, CoreResult};
use crate::recurrence::RecurrenceRule;
use crate::types::Category;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event.
///
/// `date` is the anchor day: the event's own primary placement and the base
/// of any recurrence. `time` is an optional clock time; `None` means an
/// all-day or unspecified-time event. Dates are local calendar days with no
/// zone conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique id, stable across edits.
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub recurrence: RecurrenceRule,
    /// Set once on create, preserved on edit.
    pub created_at: DateTime<Utc>,
}

/// A derived instance of a repeating event on one calendar day.
///
/// Never persisted; recomputed from the owning event on every query. The
/// synthetic id is `"{owner_id}-{ISO date}"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: String,
    pub original_event_id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub description: String,
    pub category: Category,
    /// Always `true`; marks this as a generated instance rather than an
    /// event's own anchor placement.
    pub is_recurring_instance: bool,
}

impl Occurrence {
    /// Materializes the occurrence of `event` on `date`, copying the
    /// owner's display fields.
    #[must_use]
    pub fn materialize(event: &Event, date: NaiveDate) -> Self {
        Self {
            id: format!("{}-{}", event.id, date),
            original_event_id: event.id.clone(),
            title: event.title.clone(),
            date,
            time: event.time,
            description: event.description.clone(),
            category: event.category,
            is_recurring_instance: true,
        }
    }
}

/// Raw event fields as collected by a form, before validation.
///
/// `date` and `time` are the form's string representations; `time` may be
/// empty for an all-day event.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub category: Category,
    pub recurrence: RecurrenceRule,
}

impl EventDraft {
    /// ## Summary
    /// Builds a new event from this draft, assigning a fresh id and setting
    /// `created_at` to now.
    ///
    /// ## Errors
    /// Returns a `CoreError` if validation fails (see [`Self::build`]).
    pub fn create(self) -> CoreResult<Event> {
        let id = uuid::Uuid::new_v4().to_string();
        self.build(id, Utc::now())
    }

    /// ## Summary
    /// Builds an edited version of `existing` from this draft. The id and
    /// `created_at` of the existing event are preserved.
    ///
    /// ## Errors
    /// Returns a `CoreError` if validation fails (see [`Self::build`]).
    pub fn edit(self, existing: &Event) -> CoreResult<Event> {
        self.build(existing.id.clone(), existing.created_at)
    }

    /// ## Summary
    /// Validates the draft and produces an `Event`.
    ///
    /// Title and description are trimmed. A repeating rule must carry an
    /// end date; the engine itself treats a missing end date as "never
    /// ends", but stored events are required to bound their recurrence.
    ///
    /// ## Errors
    /// - `ValidationError` for a blank title or a repeating rule with no
    ///   end date.
    /// - `ParseError` for a date or time string that is not a calendar
    ///   day / clock time.
    fn build(self, id: String, created_at: DateTime<Utc>) -> CoreResult<Event> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::ValidationError("Event title is required.".to_string()));
        }

        let date = parse_form_date(&self.date)?;
        let time = parse_form_time(&self.time)?;

        if self.recurrence.is_repeating() && self.recurrence.end_date().is_none() {
            return Err(CoreError::ValidationError(
                "Recurrence end date is required.".to_string(),
            ));
        }

        tracing::debug!(%id, %date, "built event from draft");

        Ok(Event {
            id,
            title: title.to_string(),
            date,
            time,
            description: self.description.trim().to_string(),
            category: self.category,
            recurrence: self.recurrence,
            created_at,
        })
    }
}

/// Parses a form date string (`YYYY-MM-DD`) into a calendar day.
///
/// ## Errors
/// Returns `ParseError` for anything that is not a valid calendar day;
/// a malformed date must fail fast rather than silently become a wrong day.
pub fn parse_form_date(input: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|err| CoreError::ParseError(format!("invalid date {input:?}: {err}")))
}

/// Parses a form time string (`HH:MM`, or `HH:MM:SS`); empty means no time.
///
/// ## Errors
/// Returns `ParseError` for a non-empty string that is not a clock time.
pub fn parse_form_time(input: &str) -> CoreResult<Option<NaiveTime>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(input, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M:%S"))
        .map(Some)
        .map_err(|err| CoreError::ParseError(format!("invalid time {input:?}: {err}")))
}
