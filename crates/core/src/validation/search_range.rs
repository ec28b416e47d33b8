//! Search filter date-range checks.
//!
//! Accepted shapes:
//!
//! ```text
//! { date:      { after, before } }
//! { startDate: { after, before } }
//! { endDate:   { after, before } }
//! { startDate: { after, .. }, endDate: { .., before } }   combined range
//! ```

use chrono::FixedOffset;

use super::error::ValidationError;
use crate::search::{DateBounds, EffectiveRange, FilterDate, SearchFilter};

/// Validate `filter` and resolve it to a single range.
///
/// Returns `Ok(None)` when no date filter was given at all.
pub fn validate_search_range(
    filter: &SearchFilter,
    zone: FixedOffset,
) -> Result<Option<EffectiveRange>, ValidationError> {
    let (after, before) = match (&filter.date, &filter.start_date, &filter.end_date) {
        (None, None, None) => return Ok(None),
        (Some(date), None, None) => both_bounds(date)?,
        (Some(_), _, _) => return Err(ValidationError::AmbiguousDateFilter),
        (None, Some(start), Some(end)) => (
            start.after.ok_or(ValidationError::IncompleteDateRange)?,
            end.before.ok_or(ValidationError::IncompleteDateRange)?,
        ),
        (None, Some(bounds), None) | (None, None, Some(bounds)) => both_bounds(bounds)?,
    };

    let range = EffectiveRange {
        after: after.resolve(zone),
        before: before.resolve(zone),
    };
    if range.after > range.before {
        return Err(ValidationError::InvertedDateRange);
    }
    Ok(Some(range))
}

fn both_bounds(bounds: &DateBounds) -> Result<(FilterDate, FilterDate), ValidationError> {
    match (bounds.after, bounds.before) {
        (Some(after), Some(before)) => Ok((after, before)),
        _ => Err(ValidationError::IncompleteDateRange),
    }
}
