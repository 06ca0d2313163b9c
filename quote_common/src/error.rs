//! Error types shared across the workspace.
//!
//! The `QuoteError` enum unifies the failure cases of the quote source (transport,
//! status, payload), of the favorites storage, and of the host collaborators
//! (clipboard, URL opener), so every crate can propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the source and the widget.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (files, pipes, processes).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport-level failure talking to the quote provider.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The quote provider answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The provider response could not be turned into a `Quote`.
    #[error("Malformed quote payload: {0}")]
    MalformedPayload(String),

    /// No API key was configured, so the provider cannot be called.
    #[error("Quote provider API key is not configured")]
    MissingApiKey,

    /// The persistent key-value storage failed to read or write a slot.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Writing to the system clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Opening an external URL failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
