//! Restricted-event `params` shape.
//!
//! Only presence and object-ness are enforced. Finer checks on the contents
//! (cohort vs. user id lists, id format) are not enabled.

use serde_json::Value;

use super::error::ValidationError;
use crate::event::CreateEvent;
use crate::types::JsonObject;

/// Require an object `params` on restricted events; reset it to `{}` on open
/// events.
pub fn validate_restricted_params(event: &mut CreateEvent) -> Result<(), ValidationError> {
    if !event.is_restricted {
        event.params = Some(Value::Object(JsonObject::new()));
        return Ok(());
    }
    match event.params {
        Some(Value::Object(_)) => Ok(()),
        _ => Err(ValidationError::InvalidParamsShape),
    }
}
