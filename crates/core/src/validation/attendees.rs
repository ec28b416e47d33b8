//! Attendee lists belong to restricted events only.

use super::error::ValidationError;
use crate::event::CreateEvent;

pub fn validate_attendees(event: &CreateEvent) -> Result<(), ValidationError> {
    if !event.is_restricted && event.has_attendees() {
        return Err(ValidationError::AttendeesNotAllowedForOpenEvent);
    }
    Ok(())
}
