//! Data types produced by the quote source.
//!
//! - `payload` — the provider's JSON body and its conversion into a `Quote`.
//! - `outcome` — the `(quote, color)` result of one fetch, success or fallback.

pub mod outcome;
pub mod payload;
