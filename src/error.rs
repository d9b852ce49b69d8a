//! Request parsing error types.
//!
//! The assignment and scheduling algorithms never fail; the only fallible
//! step is turning caller-supplied date/time strings into typed values.

use thiserror::Error;

/// Errors raised while parsing a scheduling request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid {field} {value:?}: expected HH:MM")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type RequestResult<T> = Result<T, RequestError>;
