//! Semantic validation of event payloads.
//!
//! Each submodule holds one independent rule. [`validate_create_event`] runs
//! them in a fixed order and stops at the first failure; nothing is
//! aggregated. Every rule reads the clock afresh through [`ZoneClock`].

pub mod attendees;
pub mod date_range;
pub mod error;
pub mod params;
pub mod recurrence;
pub mod registration;
pub mod search_range;

pub use error::{DateRangeIssue, ValidationError};

use crate::clock::ZoneClock;
use crate::event::CreateEvent;
use crate::search::{EffectiveRange, SearchFilter};

/// Run the create-event chain.
///
/// Order: date range, registration window, recurrence, attendees, restricted
/// params. On success the event comes back unchanged except that `params` is
/// reset to `{}` for open events.
pub fn validate_create_event(
    mut event: CreateEvent,
    clock: &ZoneClock,
) -> Result<CreateEvent, ValidationError> {
    date_range::validate_date_range(&event, clock.now(), clock.zone())?;
    registration::validate_registration_window(&event, clock.now())?;
    recurrence::validate_recurrence(&event, clock.now(), clock.zone())?;
    attendees::validate_attendees(&event)?;
    params::validate_restricted_params(&mut event)?;
    Ok(event)
}

/// Run the search-filter check and resolve the effective range.
pub fn validate_search_filter(
    filter: &SearchFilter,
    clock: &ZoneClock,
) -> Result<Option<EffectiveRange>, ValidationError> {
    search_range::validate_search_range(filter, clock.zone())
}
