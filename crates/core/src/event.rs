//! Create-event request payload.
//!
//! Field-level constraints (lengths) are declared with `validator` derives and
//! checked by the API layer before the semantic chain in
//! [`crate::validation`] runs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{JsonObject, Timestamp};

/// `endCondition.type` value for a recurrence ending on a fixed date.
pub const END_CONDITION_END_DATE: &str = "endDate";

/// `endCondition.type` value for a recurrence ending after N occurrences.
pub const END_CONDITION_OCCURRENCES: &str = "occurrences";

/// Maximum length of an event title.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of an event description.
pub const MAX_DESCRIPTION_LENGTH: u64 = 5_000;

/// Maximum number of attendee identifiers on a single event.
pub const MAX_ATTENDEES: u64 = 1_000;

/// Incoming "create event" submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub start_datetime: Timestamp,
    pub end_datetime: Timestamp,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrencePattern>,

    #[serde(default)]
    pub is_restricted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_start_date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_end_date: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_ATTENDEES))]
    pub attendees: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl CreateEvent {
    /// Whether either registration bound is set.
    pub fn has_registration_dates(&self) -> bool {
        self.registration_start_date.is_some() || self.registration_end_date.is_some()
    }

    /// Whether a non-empty attendee list was supplied.
    pub fn has_attendees(&self) -> bool {
        self.attendees.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Whether a recurrence pattern with at least one key was supplied.
    pub fn has_recurrence_pattern(&self) -> bool {
        self.recurrence_pattern
            .as_ref()
            .is_some_and(|p| !p.is_empty())
    }
}

/// Recurrence configuration.
///
/// Only `endCondition` is interpreted. Any other keys (`frequency`,
/// `interval`, ...) are kept as-is and only matter for emptiness checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_condition: Option<EndCondition>,

    #[serde(flatten)]
    pub extra: JsonObject,
}

impl RecurrencePattern {
    pub fn is_empty(&self) -> bool {
        self.end_condition.is_none() && self.extra.is_empty()
    }
}

/// How a recurring event terminates.
///
/// `kind` is kept as a raw string so unknown types reach the validator and
/// are reported as an invalid pattern rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndCondition {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl EndCondition {
    /// The type, if present and non-empty.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref().filter(|k| !k.is_empty())
    }

    /// The value, if present, non-null and not an empty string.
    pub fn value(&self) -> Option<&serde_json::Value> {
        match &self.value {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) if s.is_empty() => None,
            Some(v) => Some(v),
        }
    }
}
