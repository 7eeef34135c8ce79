//! Recurrence rule configuration attached to an event.
//!
//! A closed sum type so every consumer handles all variants exhaustively;
//! there is no "unknown type" fallback that could silently drop occurrences.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How an event repeats after its anchor date.
///
/// All repeating variants carry an optional inclusive `end_date`; a missing
/// end date means the rule never ends. `Custom` uses the same every-N-days
/// math as `Daily` and exists only as a distinct user-facing label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecurrenceRule {
    #[default]
    None,
    Daily {
        #[serde(default = "default_interval")]
        interval: u32,
        #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
    Weekly {
        #[serde(default = "default_interval")]
        interval: u32,
        #[serde(rename = "daysOfWeek", default, with = "weekday_set")]
        days_of_week: Vec<Weekday>,
        #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
    Monthly {
        #[serde(default = "default_interval")]
        interval: u32,
        #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
    Custom {
        #[serde(default = "default_interval")]
        interval: u32,
        #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
        end_date: Option<NaiveDate>,
    },
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceRule {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_repeating(&self) -> bool {
        !self.is_none()
    }

    /// Effective repetition interval. A stored interval of 0 is coerced to
    /// 1, never treated as an error; `None` rules report 1.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        match self {
            Self::None => 1,
            Self::Daily { interval, .. }
            | Self::Weekly { interval, .. }
            | Self::Monthly { interval, .. }
            | Self::Custom { interval, .. } => {
                if *interval == 0 { 1 } else { *interval }
            }
        }
    }

    /// Inclusive upper bound on occurrence generation, when set.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Self::None => None,
            Self::Daily { end_date, .. }
            | Self::Weekly { end_date, .. }
            | Self::Monthly { end_date, .. }
            | Self::Custom { end_date, .. } => *end_date,
        }
    }
}

/// Maps a Sunday-based weekday index (0..=6, as stored) to a weekday.
#[must_use]
pub const fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Serde adapter for the stored `daysOfWeek` form: an array of 0..=6
/// Sunday-based numbers, insertion order preserved.
mod weekday_set {
    use chrono::Weekday;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(days.iter().map(|day| day.num_days_from_sunday()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Weekday>, D::Error> {
        let indices = Vec::<u8>::deserialize(deserializer)?;
        indices
            .into_iter()
            .map(|index| {
                super::weekday_from_sunday_index(index)
                    .ok_or_else(|| D::Error::custom(format!("weekday index out of range: {index}")))
            })
            .collect()
    }
}
