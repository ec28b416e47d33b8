//! Start/end consistency of the event itself.

use chrono::FixedOffset;

use super::error::{DateRangeIssue, ValidationError};
use crate::clock::same_calendar_day;
use crate::event::CreateEvent;
use crate::types::Timestamp;

/// Check that the event starts in the future, does not end before it starts,
/// and, when recurring, starts and ends on the same calendar day in `zone`.
pub fn validate_date_range(
    event: &CreateEvent,
    now: Timestamp,
    zone: FixedOffset,
) -> Result<(), ValidationError> {
    let start = event.start_datetime;
    let end = event.end_datetime;

    if event.is_recurring && !same_calendar_day(&start, &end, zone) {
        return Err(ValidationError::InvalidDateRange(
            DateRangeIssue::MultiDayRecurring,
        ));
    }
    if start <= now {
        return Err(ValidationError::InvalidDateRange(
            DateRangeIssue::StartNotInFuture,
        ));
    }
    if end < start {
        return Err(ValidationError::InvalidDateRange(
            DateRangeIssue::EndBeforeStart,
        ));
    }
    Ok(())
}
