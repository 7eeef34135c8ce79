//! Occurrence enumeration over a date window and next-occurrence lookup.
//!
//! Both operations are linear day scans over the occurrence predicate,
//! bounded by the caps in `koyomi_core::constants`. A caller that needs a
//! longer horizon queries successive windows.

use super::evaluate::occurs_on;
use chrono::NaiveDate;
use koyomi_core::constants::{MAX_SCAN_DAYS, NEXT_OCCURRENCE_HORIZON_DAYS};
use koyomi_core::event::{Event, Occurrence};

/// ## Summary
/// Enumerates every generated occurrence of `event` from `range_start`
/// through `range_end`, both inclusive.
///
/// Returns an empty list for non-repeating events. The scan starts at the
/// later of `range_start` and the anchor day and visits at most
/// [`MAX_SCAN_DAYS`] days regardless of the requested range. Output is
/// ascending by date with no duplicates (one evaluation per calendar day).
#[must_use]
pub fn occurrences_in_range(
    event: &Event,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<Occurrence> {
    if event.recurrence.is_none() {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    let mut day = range_start.max(event.date);
    let mut scanned = 0u32;

    while day <= range_end && scanned < MAX_SCAN_DAYS {
        if occurs_on(event, day) {
            occurrences.push(Occurrence::materialize(event, day));
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
        scanned += 1;
    }

    tracing::trace!(
        event_id = %event.id,
        %range_start,
        %range_end,
        count = occurrences.len(),
        "enumerated occurrences"
    );
    occurrences
}

/// ## Summary
/// Finds the first generated occurrence of `event` on or after `after`.
///
/// Returns `None` for non-repeating events, and `None` when no occurrence
/// falls within [`NEXT_OCCURRENCE_HORIZON_DAYS`] days of the scan start
/// (the later of `after` and the anchor day).
#[must_use]
pub fn next_occurrence(event: &Event, after: NaiveDate) -> Option<NaiveDate> {
    if event.recurrence.is_none() {
        return None;
    }

    let mut day = after.max(event.date);
    for _ in 0..=NEXT_OCCURRENCE_HORIZON_DAYS {
        if occurs_on(event, day) {
            return Some(day);
        }
        day = day.succ_opt()?;
    }
    None
}
