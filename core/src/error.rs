//! Error types for the items API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so callers can tell "the item does
//! not exist" apart from "the server returned an unexpected status." Other
//! non-2xx responses land in `HttpError` with the raw status and body.
//! `Transport` is produced by hosts, never by the core itself: it is how a
//! host reports a round-trip that never yielded a response.

use thiserror::Error;

use crate::types::ItemId;

/// Errors returned by `ItemClient` parse methods and by hosts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The server answered for a different item than the one addressed.
    #[error("expected item {expected}, server returned item {returned}")]
    IdMismatch { expected: ItemId, returned: ItemId },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip (connection refused, DNS,
    /// reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
