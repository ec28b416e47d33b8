//! Validation failure kinds and their client-facing messages.

/// Which date/time consistency check tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateRangeIssue {
    #[error("Recurring events must start and end on the same day")]
    MultiDayRecurring,

    #[error("Event start must be in the future")]
    StartNotInFuture,

    #[error("Event end must not be before its start")]
    EndBeforeStart,
}

/// A rejected payload. Every variant is a client input error.
///
/// `Display` is the message returned to the client; [`ValidationError::code`]
/// is the stable machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidDateRange(DateRangeIssue),

    #[error("Restricted events cannot have registration dates")]
    RestrictedEventHasRegistrationDates,

    #[error("Registration dates cannot be in the past")]
    RegistrationDateInPast,

    #[error("Registration start date must not be after registration end date")]
    RegistrationRangeInverted,

    #[error("Registration must open and close before the event starts")]
    RegistrationOutsideEventWindow,

    #[error("Recurring events require a recurrence end condition with a type and value")]
    RecurrencePatternRequired,

    #[error("Recurrence end date is not a valid date")]
    RecurrenceEndDateInvalid,

    #[error("Recurrence end date must be in the future")]
    RecurrenceEndDateMustBeFuture,

    #[error("Recurrence end date must be after the event start")]
    RecurrenceEndDateBeforeEventDate,

    #[error("Number of occurrences must be a whole number of at least 1")]
    RecurrenceOccurrencesInvalid,

    #[error("Recurrence end condition type must be 'endDate' or 'occurrences'")]
    RecurrencePatternInvalid,

    #[error("Recurrence pattern is only allowed on recurring events")]
    RecurrencePatternNotRequired,

    #[error("Attendees can only be listed on restricted events")]
    AttendeesNotAllowedForOpenEvent,

    #[error("Restricted events require params to be an object")]
    InvalidParamsShape,

    #[error("Use either 'date' or 'startDate'/'endDate', not both")]
    AmbiguousDateFilter,

    #[error("Date range requires both 'after' and 'before'")]
    IncompleteDateRange,

    #[error("Date range 'after' must not be later than 'before'")]
    InvertedDateRange,
}

impl ValidationError {
    /// Stable code reported alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange(_) => "INVALID_DATE_RANGE",
            Self::RestrictedEventHasRegistrationDates => "RESTRICTED_EVENT_HAS_REGISTRATION_DATES",
            Self::RegistrationDateInPast => "REGISTRATION_DATE_IN_PAST",
            Self::RegistrationRangeInverted => "REGISTRATION_RANGE_INVERTED",
            Self::RegistrationOutsideEventWindow => "REGISTRATION_OUTSIDE_EVENT_WINDOW",
            Self::RecurrencePatternRequired => "RECURRENCE_PATTERN_REQUIRED",
            Self::RecurrenceEndDateInvalid => "RECURRENCE_END_DATE_INVALID",
            Self::RecurrenceEndDateMustBeFuture => "RECURRENCE_END_DATE_MUST_BE_FUTURE",
            Self::RecurrenceEndDateBeforeEventDate => "RECURRENCE_END_DATE_BEFORE_EVENT_DATE",
            Self::RecurrenceOccurrencesInvalid => "RECURRENCE_OCCURRENCES_INVALID",
            Self::RecurrencePatternInvalid => "RECURRENCE_PATTERN_INVALID",
            Self::RecurrencePatternNotRequired => "RECURRENCE_PATTERN_NOT_REQUIRED",
            Self::AttendeesNotAllowedForOpenEvent => "ATTENDEES_NOT_ALLOWED_FOR_OPEN_EVENT",
            Self::InvalidParamsShape => "INVALID_PARAMS_SHAPE",
            Self::AmbiguousDateFilter => "AMBIGUOUS_DATE_FILTER",
            Self::IncompleteDateRange => "INCOMPLETE_DATE_RANGE",
            Self::InvertedDateRange => "INVERTED_DATE_RANGE",
        }
    }
}
