//! Current-moment and timezone resolution.
//!
//! Validators never read the wall clock themselves. The caller resolves a
//! [`ZoneClock`] once at startup and passes `now()` / `zone()` into each
//! validator invocation, so every check observes a fresh moment in the
//! configured zone.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Date-only format accepted wherever a bare date may stand in for a timestamp.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock bound to an optional configured UTC offset.
///
/// When no offset is configured the host's local offset is used, re-read on
/// every call so DST changes are picked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneClock {
    offset: Option<FixedOffset>,
}

impl ZoneClock {
    /// Clock pinned to a fixed offset.
    pub fn fixed(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// Clock following the host's local offset.
    pub fn system() -> Self {
        Self { offset: None }
    }

    /// Build a clock from an optional configuration value such as `+02:00`.
    ///
    /// `None` or a blank string yields [`ZoneClock::system`].
    pub fn from_setting(setting: Option<&str>) -> Result<Self, CoreError> {
        match setting.map(str::trim) {
            None | Some("") => Ok(Self::system()),
            Some(raw) => parse_offset(raw).map(Self::fixed),
        }
    }

    /// The configured offset, if any.
    pub fn configured_offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The offset all calendar arithmetic is done in.
    pub fn zone(&self) -> FixedOffset {
        self.offset.unwrap_or_else(|| *Local::now().offset())
    }

    /// The current moment expressed in [`ZoneClock::zone`].
    pub fn now(&self) -> Timestamp {
        Utc::now().with_timezone(&self.zone())
    }

    /// Re-express `ts` in [`ZoneClock::zone`]. The instant is unchanged.
    pub fn to_zone(&self, ts: &Timestamp) -> Timestamp {
        ts.with_timezone(&self.zone())
    }
}

/// Parse a UTC offset setting.
///
/// Accepts `Z`, `UTC`, `+HH:MM`, `-HH:MM`, `+HHMM` and `+HH`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, CoreError> {
    let invalid = || CoreError::Config(format!("invalid UTC offset '{raw}'"));
    let s = raw.trim();

    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    if !s.is_ascii() {
        return Err(invalid());
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let (hh, mm) = match (rest.len(), rest.as_bytes().get(2)) {
        (2, _) => (rest, "00"),
        (4, _) => (&rest[..2], &rest[2..]),
        (5, Some(b':')) => (&rest[..2], &rest[3..]),
        _ => return Err(invalid()),
    };
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = hh.parse().map_err(|_| invalid())?;
    let minutes: i32 = mm.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// Bare dates resolve to midnight in `zone`. Returns `None` for anything
/// else.
pub fn parse_moment(raw: &str, zone: FixedOffset) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(zone)
        .single()
}

/// Whether two instants fall on the same calendar day in `zone`.
pub fn same_calendar_day(a: &Timestamp, b: &Timestamp, zone: FixedOffset) -> bool {
    a.with_timezone(&zone).date_naive() == b.with_timezone(&zone).date_naive()
}
