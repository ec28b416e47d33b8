//! Event search filter payload.
//!
//! A filter narrows results by a single date range, given either as `date`
//! or as a `startDate` / `endDate` pair. See
//! [`crate::validation::search_range`] for the rules.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Search filter as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateBounds>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateBounds>,
}

/// An `{ after, before }` pair; either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<FilterDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<FilterDate>,
}

/// A bound given either as a full timestamp or as a bare `YYYY-MM-DD` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterDate {
    DateTime(Timestamp),
    Date(NaiveDate),
}

impl FilterDate {
    /// Resolve to an instant. Bare dates mean midnight in `zone`.
    pub fn resolve(&self, zone: FixedOffset) -> Timestamp {
        match self {
            FilterDate::DateTime(ts) => *ts,
            FilterDate::Date(date) => {
                let midnight = date.and_time(chrono::NaiveTime::MIN);
                match midnight.and_local_timezone(zone).single() {
                    Some(ts) => ts,
                    // Fixed offsets never produce gaps or folds.
                    None => midnight.and_utc().with_timezone(&zone),
                }
            }
        }
    }
}

/// The single `[after, before]` range a valid filter resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveRange {
    pub after: Timestamp,
    pub before: Timestamp,
}
