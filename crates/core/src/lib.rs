//! Domain crate for event-payload validation.
//!
//! Holds the request payload types, clock/zone resolution and the validation
//! chain. No I/O: the API crate feeds parsed payloads in and maps failures to
//! HTTP responses.

pub mod clock;
pub mod error;
pub mod event;
pub mod search;
pub mod types;
pub mod validation;
