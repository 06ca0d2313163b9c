//! Quote acquisition for the quote machine.
//!
//! This crate owns "the current quote" and "the current accent color":
//!
//! - `provider` — `QuoteProvider` seam and the RapidAPI-backed implementation.
//! - `model` — provider payload decoding and the `FetchOutcome` of a fetch.
//! - `source` — `QuoteSource`, which fetches on worker threads and applies completions.
//! - `theme` — the `ThemeSink` side channel receiving the ambient text color.
//!
//! Failure handling: a fetch never surfaces an error. Transport failures, non-success
//! statuses and malformed payloads are logged and replaced by a random quote from the
//! embedded fallback corpus.
#![warn(missing_docs)]
pub mod model;
pub mod provider;
pub mod source;
pub mod theme;

pub use model::outcome::{FetchOutcome, Origin};
pub use provider::{QuoteProvider, RapidApiProvider};
pub use source::QuoteSource;
pub use theme::ThemeSink;
