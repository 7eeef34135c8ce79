//! Human-readable labels for recurrence rules. Pure string mapping, no
//! date math.

use chrono::Weekday;
use koyomi_core::recurrence::RecurrenceRule;

const fn abbreviation(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// ## Summary
/// Renders a recurrence rule as a short human-readable label.
///
/// Weekly rules with an explicit weekday set list the abbreviations in
/// stored order, which is the order the set was built in rather than
/// calendar order. `Custom` always reads "Every {n} days", with no singular
/// special case; only `Daily` collapses to "Daily".
#[must_use]
pub fn describe(rule: &RecurrenceRule) -> String {
    let interval = rule.interval();
    match rule {
        RecurrenceRule::None => "No recurrence".to_string(),
        RecurrenceRule::Daily { .. } => {
            if interval == 1 {
                "Daily".to_string()
            } else {
                format!("Every {interval} days")
            }
        }
        RecurrenceRule::Weekly { days_of_week, .. } => {
            let base = if interval == 1 {
                "Weekly".to_string()
            } else {
                format!("Every {interval} weeks")
            };
            if days_of_week.is_empty() {
                base
            } else {
                format!("{base} on {}", join_abbreviations(days_of_week))
            }
        }
        RecurrenceRule::Monthly { .. } => {
            if interval == 1 {
                "Monthly".to_string()
            } else {
                format!("Every {interval} months")
            }
        }
        RecurrenceRule::Custom { .. } => format!("Every {interval} days"),
    }
}

fn join_abbreviations(days: &[Weekday]) -> String {
    days.iter()
        .map(|day| abbreviation(*day))
        .collect::<Vec<_>>()
        .join(", ")
}
