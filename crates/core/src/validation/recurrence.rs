//! Recurrence configuration checks.
//!
//! A recurring event needs an `endCondition` of either
//! `{ "type": "endDate", "value": <date> }` or
//! `{ "type": "occurrences", "value": <n >= 1> }`. A non-recurring event must
//! not carry a pattern at all.

use chrono::FixedOffset;
use serde_json::Value;

use super::error::ValidationError;
use crate::clock::parse_moment;
use crate::event::{CreateEvent, END_CONDITION_END_DATE, END_CONDITION_OCCURRENCES};
use crate::types::Timestamp;

/// Smallest accepted occurrence count.
pub const MIN_OCCURRENCES: i64 = 1;

pub fn validate_recurrence(
    event: &CreateEvent,
    now: Timestamp,
    zone: FixedOffset,
) -> Result<(), ValidationError> {
    if !event.is_recurring {
        if event.has_recurrence_pattern() {
            return Err(ValidationError::RecurrencePatternNotRequired);
        }
        return Ok(());
    }

    let end_condition = event
        .recurrence_pattern
        .as_ref()
        .and_then(|p| p.end_condition.as_ref());
    let Some((kind, value)) = end_condition.and_then(|c| Some((c.kind()?, c.value()?))) else {
        return Err(ValidationError::RecurrencePatternRequired);
    };

    match kind {
        END_CONDITION_END_DATE => check_end_date(value, event.start_datetime, now, zone),
        END_CONDITION_OCCURRENCES => check_occurrences(value),
        _ => Err(ValidationError::RecurrencePatternInvalid),
    }
}

fn check_end_date(
    value: &Value,
    event_start: Timestamp,
    now: Timestamp,
    zone: FixedOffset,
) -> Result<(), ValidationError> {
    let ends = value
        .as_str()
        .and_then(|raw| parse_moment(raw, zone))
        .ok_or(ValidationError::RecurrenceEndDateInvalid)?;

    if ends <= now {
        return Err(ValidationError::RecurrenceEndDateMustBeFuture);
    }
    if ends <= event_start {
        return Err(ValidationError::RecurrenceEndDateBeforeEventDate);
    }
    Ok(())
}

fn check_occurrences(value: &Value) -> Result<(), ValidationError> {
    match parse_occurrences(value) {
        Some(n) if n >= MIN_OCCURRENCES => Ok(()),
        _ => Err(ValidationError::RecurrenceOccurrencesInvalid),
    }
}

/// Integers and integer strings only; floats and other types are rejected.
fn parse_occurrences(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
