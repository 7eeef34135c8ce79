//! Per-day occurrence predicate for recurring events.
//!
//! All comparisons are day-granular; the anchor day itself is never a
//! generated occurrence, and nothing occurs before the anchor or after an
//! inclusive end date.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use koyomi_core::event::Event;
use koyomi_core::recurrence::RecurrenceRule;

/// ## Summary
/// Decides whether `event` has a generated occurrence on `check_date`.
///
/// Returns `false` for non-repeating events, for days before the anchor,
/// for days after the rule's inclusive end date, and for the anchor day
/// itself (that is the event's own primary placement). Otherwise dispatches
/// on the rule variant:
///
/// - Daily/Custom: elapsed days is a positive multiple of the interval.
/// - Weekly: the weekday is in the rule's set (defaulting to the anchor's
///   weekday when the set is empty) and the number of elapsed calendar
///   weeks, `floor(days / 7)`, is a positive multiple of the interval.
/// - Monthly: same day-of-month as the anchor and the elapsed month count
///   is a positive multiple of the interval. Months shorter than the
///   anchor's day-of-month never match; there is no roll to month end.
#[must_use]
pub fn occurs_on(event: &Event, check_date: NaiveDate) -> bool {
    let rule = &event.recurrence;
    let anchor = event.date;

    if rule.is_none() {
        return false;
    }
    // Recurrence cannot run backward.
    if check_date < anchor {
        return false;
    }
    // Inclusive bound: a check date equal to the end date is allowed.
    if let Some(end) = rule.end_date()
        && check_date > end
    {
        return false;
    }
    // The anchor is already visible via the event's own date field.
    if check_date == anchor {
        return false;
    }

    let interval = i64::from(rule.interval());
    match rule {
        RecurrenceRule::None => false,
        RecurrenceRule::Daily { .. } | RecurrenceRule::Custom { .. } => {
            matches_day_interval(anchor, check_date, interval)
        }
        RecurrenceRule::Weekly { days_of_week, .. } => {
            matches_week_interval(anchor, check_date, interval, days_of_week)
        }
        RecurrenceRule::Monthly { .. } => matches_month_interval(anchor, check_date, interval),
    }
}

/// Datetime-carrying convenience: strips the time of day and evaluates the
/// calendar day.
#[must_use]
pub fn occurs_on_datetime(event: &Event, check: NaiveDateTime) -> bool {
    occurs_on(event, check.date())
}

fn matches_day_interval(anchor: NaiveDate, check_date: NaiveDate, interval: i64) -> bool {
    let days = check_date.signed_duration_since(anchor).num_days();
    days > 0 && days % interval == 0
}

fn matches_week_interval(
    anchor: NaiveDate,
    check_date: NaiveDate,
    interval: i64,
    days_of_week: &[Weekday],
) -> bool {
    let weekday_selected = if days_of_week.is_empty() {
        // No explicit selection defaults to the anchor's own weekday.
        check_date.weekday() == anchor.weekday()
    } else {
        days_of_week.contains(&check_date.weekday())
    };
    if !weekday_selected {
        return false;
    }

    // Elapsed calendar weeks from the anchor, not occurrence count: a
    // selected weekday in week 0 never matches.
    let weeks = check_date.signed_duration_since(anchor).num_days() / 7;
    weeks > 0 && weeks % interval == 0
}

fn matches_month_interval(anchor: NaiveDate, check_date: NaiveDate, interval: i64) -> bool {
    if check_date.day() != anchor.day() {
        return false;
    }

    let months = (i64::from(check_date.year()) - i64::from(anchor.year())) * 12
        + (i64::from(check_date.month()) - i64::from(anchor.month()));
    months > 0 && months % interval == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_core::types::Category;

    fn event_on(date: NaiveDate, rule: RecurrenceRule) -> Event {
        Event {
            id: "evt".to_string(),
            title: "Test".to_string(),
            date,
            time: None,
            description: String::new(),
            category: Category::Personal,
            recurrence: rule,
            created_at: chrono::Utc::now(),
        }
    }

    fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dom).expect("valid date")
    }

    #[test]
    fn test_none_rule_never_occurs() {
        let event = event_on(day(2024, 1, 1), RecurrenceRule::None);
        assert!(!occurs_on(&event, day(2024, 1, 1)));
        assert!(!occurs_on(&event, day(2024, 1, 2)));
        assert!(!occurs_on(&event, day(2030, 7, 15)));
    }

    #[test]
    fn test_before_anchor_never_occurs() {
        let event = event_on(
            day(2024, 1, 10),
            RecurrenceRule::Daily {
                interval: 1,
                end_date: None,
            },
        );
        assert!(!occurs_on(&event, day(2024, 1, 9)));
        assert!(!occurs_on(&event, day(2023, 12, 31)));
    }

    #[test]
    fn test_anchor_day_excluded() {
        let event = event_on(
            day(2024, 1, 10),
            RecurrenceRule::Daily {
                interval: 1,
                end_date: None,
            },
        );
        assert!(!occurs_on(&event, day(2024, 1, 10)));
        assert!(occurs_on(&event, day(2024, 1, 11)));
    }

    #[test]
    fn test_end_date_inclusive() {
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Daily {
                interval: 1,
                end_date: Some(day(2024, 1, 5)),
            },
        );
        assert!(occurs_on(&event, day(2024, 1, 5)));
        assert!(!occurs_on(&event, day(2024, 1, 6)));
    }

    #[test]
    fn test_daily_interval_three() {
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Daily {
                interval: 3,
                end_date: None,
            },
        );
        assert!(!occurs_on(&event, day(2024, 1, 2)));
        assert!(!occurs_on(&event, day(2024, 1, 3)));
        assert!(occurs_on(&event, day(2024, 1, 4)));
        assert!(!occurs_on(&event, day(2024, 1, 5)));
        assert!(occurs_on(&event, day(2024, 1, 7)));
    }

    #[test]
    fn test_custom_matches_daily_math() {
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Custom {
                interval: 3,
                end_date: None,
            },
        );
        assert!(occurs_on(&event, day(2024, 1, 4)));
        assert!(!occurs_on(&event, day(2024, 1, 5)));
    }

    #[test]
    fn test_weekly_counts_elapsed_weeks_not_occurrences() {
        // 2024-01-01 is a Monday.
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Weekly {
                interval: 1,
                days_of_week: vec![Weekday::Mon, Weekday::Wed],
                end_date: None,
            },
        );
        // Wednesday of week 0: selected weekday, but zero elapsed weeks.
        assert!(!occurs_on(&event, day(2024, 1, 3)));
        // Week 1.
        assert!(occurs_on(&event, day(2024, 1, 8)));
        assert!(occurs_on(&event, day(2024, 1, 10)));
        // Unselected weekday in week 1.
        assert!(!occurs_on(&event, day(2024, 1, 9)));
    }

    #[test]
    fn test_weekly_empty_set_defaults_to_anchor_weekday() {
        let event = event_on(
            day(2024, 1, 1), // Monday
            RecurrenceRule::Weekly {
                interval: 2,
                days_of_week: vec![],
                end_date: None,
            },
        );
        assert!(!occurs_on(&event, day(2024, 1, 8))); // week 1, interval 2
        assert!(occurs_on(&event, day(2024, 1, 15))); // week 2
        assert!(!occurs_on(&event, day(2024, 1, 16))); // Tuesday
    }

    #[test]
    fn test_monthly_short_months_skipped() {
        let event = event_on(
            day(2024, 1, 31),
            RecurrenceRule::Monthly {
                interval: 1,
                end_date: None,
            },
        );
        // February 2024 has no 31st; every day of it is a miss.
        let mut check = day(2024, 2, 1);
        while check.month() == 2 {
            assert!(!occurs_on(&event, check), "unexpected occurrence on {check}");
            check = check.succ_opt().expect("valid successor");
        }
        assert!(occurs_on(&event, day(2024, 3, 31)));
    }

    #[test]
    fn test_monthly_interval_across_years() {
        let event = event_on(
            day(2024, 11, 15),
            RecurrenceRule::Monthly {
                interval: 3,
                end_date: None,
            },
        );
        assert!(occurs_on(&event, day(2025, 2, 15)));
        assert!(!occurs_on(&event, day(2025, 1, 15)));
        assert!(!occurs_on(&event, day(2025, 2, 14)));
    }

    #[test]
    fn test_zero_interval_behaves_as_one() {
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Daily {
                interval: 0,
                end_date: None,
            },
        );
        assert!(occurs_on(&event, day(2024, 1, 2)));
    }

    #[test]
    fn test_datetime_input_stripped_to_day() {
        let event = event_on(
            day(2024, 1, 1),
            RecurrenceRule::Daily {
                interval: 1,
                end_date: None,
            },
        );
        let noon = day(2024, 1, 2).and_hms_opt(12, 30, 0).expect("valid time");
        assert!(occurs_on_datetime(&event, noon));
    }
}
