//!
//! Common types and utilities shared by the quote source and the widget.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` value type.
//! - `color` — the fixed accent palette.
//! - `fallback` — the embedded fallback corpus.
//! - `net` — remote endpoints and header names.
#![warn(missing_docs)]
pub mod color;
pub mod error;
pub mod fallback;
pub mod net;
pub mod quote;
pub mod result;

pub use color::{AccentColor, PALETTE};
pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
