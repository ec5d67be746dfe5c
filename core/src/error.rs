//! Error type for the Cachet client.
//!
//! # Design
//! Every failure an operation can produce lands in one enum, split along
//! the lines a caller acts on: configuration missing (fix the host config),
//! validation (fix the call), remote (the service itself rejected the
//! request and said why), and transport/protocol (nothing usable came
//! back). Validation failures — including status values out of range — use
//! the same `Result` convention as everything else.

use std::fmt;

/// Errors returned by `CachetClient` operations.
#[derive(Debug, Clone)]
pub enum Error {
    /// No API URL override was given and neither configuration key
    /// (`cachet.api_url` / `cachet:api_url`) resolved.
    MissingApiUrl,

    /// The operation requires authentication but no token override was
    /// given and neither configuration key resolved.
    MissingApiToken,

    /// A mandatory parameter with no schema default was not supplied.
    MissingParam(&'static str),

    /// Component status outside the valid range 1..=4.
    InvalidComponentStatus(i64),

    /// Incident status outside the valid range 0..=4.
    InvalidIncidentStatus(i64),

    /// A status value that is neither an integer nor a string parseable
    /// as one.
    StatusNotNumeric(String),

    /// The service answered with an `error` field; its value is carried
    /// here verbatim.
    Api(String),

    /// The service answered with an unexpected status code and no
    /// decodable `error` payload. Details go to the diagnostic log only.
    UnexpectedStatus(u16),

    /// The HTTP exchange itself failed before a response was received.
    Transport(String),

    /// The response body could not be decoded as JSON.
    Deserialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingApiUrl => write!(f, "no Cachet API URL configured"),
            Error::MissingApiToken => write!(f, "no Cachet API token configured"),
            Error::MissingParam(name) => {
                write!(f, "mandatory parameter {name} is missing")
            }
            Error::InvalidComponentStatus(status) => {
                write!(f, "wrong component status {status}, must be between 1 and 4")
            }
            Error::InvalidIncidentStatus(status) => {
                write!(f, "wrong incident status {status}, must be between 0 and 4")
            }
            Error::StatusNotNumeric(value) => {
                write!(f, "status {value} is not an integer")
            }
            Error::Api(message) => write!(f, "API error: {message}"),
            Error::UnexpectedStatus(status) => {
                write!(f, "unexpected HTTP status {status}")
            }
            Error::Transport(msg) => write!(f, "transport error: {msg}"),
            Error::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {}
