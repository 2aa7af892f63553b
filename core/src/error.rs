//! Error type for the todo API client.
//!
//! # Design
//! Every non-2xx status collapses into `NotOk`, whose message is fixed and
//! never includes the response body; callers show it verbatim. The status is
//! kept on the variant for logging only.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods and by transports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a status outside 200..=299.
    #[error("Network response was not ok")]
    NotOk { status: u16 },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
