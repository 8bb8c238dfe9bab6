//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Transport failures are not represented here at call sites: the sub-clients
/// fold them into [`Fetched::TransportError`](crate::shared::Fetched::TransportError). What
/// remains are business-rule violations the caller has to act on.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Invalid sample time '{input}': {source}")]
    TimeParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}
