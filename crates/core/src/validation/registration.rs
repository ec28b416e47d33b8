//! Registration window checks.
//!
//! Restricted events are invitation-only and must not carry a registration
//! window. For open events the window is only checked when it has a closing
//! date; a lone `registrationStartDate` is accepted as-is.

use super::error::ValidationError;
use crate::event::CreateEvent;
use crate::types::Timestamp;

pub fn validate_registration_window(
    event: &CreateEvent,
    now: Timestamp,
) -> Result<(), ValidationError> {
    if event.is_restricted {
        if event.has_registration_dates() {
            return Err(ValidationError::RestrictedEventHasRegistrationDates);
        }
        return Ok(());
    }

    let Some(closes) = event.registration_end_date else {
        return Ok(());
    };
    let opens = event.registration_start_date;

    if closes < now || opens.is_some_and(|o| o < now) {
        return Err(ValidationError::RegistrationDateInPast);
    }
    if opens.is_some_and(|o| o > closes) {
        return Err(ValidationError::RegistrationRangeInverted);
    }

    let event_start = event.start_datetime;
    if closes > event_start || opens.is_some_and(|o| o > event_start) {
        return Err(ValidationError::RegistrationOutsideEventWindow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_support::{at, event};

    const NOW: &str = "2030-01-01T12:00:00Z";

    fn open_event(opens: Option<&str>, closes: Option<&str>) -> CreateEvent {
        let mut e = event("2030-01-10T10:00:00Z", "2030-01-10T12:00:00Z");
        e.registration_start_date = opens.map(at);
        e.registration_end_date = closes.map(at);
        e
    }

    #[test]
    fn window_before_event_passes() {
        let e = open_event(Some("2030-01-02T00:00:00Z"), Some("2030-01-09T00:00:00Z"));
        assert_eq!(validate_registration_window(&e, at(NOW)), Ok(()));
    }

    #[test]
    fn window_closing_at_event_start_passes() {
        let e = open_event(None, Some("2030-01-10T10:00:00Z"));
        assert_eq!(validate_registration_window(&e, at(NOW)), Ok(()));
    }

    #[test]
    fn no_window_passes() {
        let e = open_event(None, None);
        assert_eq!(validate_registration_window(&e, at(NOW)), Ok(()));
    }

    #[test]
    fn restricted_event_with_start_date_fails() {
        let mut e = open_event(Some("2030-01-02T00:00:00Z"), None);
        e.is_restricted = true;
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RestrictedEventHasRegistrationDates)
        );
    }

    #[test]
    fn restricted_event_with_end_date_fails() {
        let mut e = open_event(None, Some("2030-01-09T00:00:00Z"));
        e.is_restricted = true;
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RestrictedEventHasRegistrationDates)
        );
    }

    #[test]
    fn restricted_event_without_window_passes() {
        let mut e = open_event(None, None);
        e.is_restricted = true;
        assert_eq!(validate_registration_window(&e, at(NOW)), Ok(()));
    }

    #[test]
    fn past_opening_fails() {
        let e = open_event(Some("2029-12-31T00:00:00Z"), Some("2030-01-09T00:00:00Z"));
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RegistrationDateInPast)
        );
    }

    #[test]
    fn past_closing_fails() {
        let e = open_event(None, Some("2030-01-01T11:59:59Z"));
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RegistrationDateInPast)
        );
    }

    #[test]
    fn inverted_window_fails() {
        let e = open_event(Some("2030-01-09T00:00:00Z"), Some("2030-01-05T00:00:00Z"));
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RegistrationRangeInverted)
        );
    }

    #[test]
    fn closing_after_event_start_fails() {
        let e = open_event(Some("2030-01-02T00:00:00Z"), Some("2030-01-10T10:00:01Z"));
        assert_eq!(
            validate_registration_window(&e, at(NOW)),
            Err(ValidationError::RegistrationOutsideEventWindow)
        );
    }

    #[test]
    fn lone_start_date_is_not_checked() {
        // Without a closing date the opening date is never evaluated, even
        // when it lies in the past.
        let e = open_event(Some("2020-01-01T00:00:00Z"), None);
        assert_eq!(validate_registration_window(&e, at(NOW)), Ok(()));
    }
}
