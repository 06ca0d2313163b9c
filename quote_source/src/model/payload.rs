//! Provider response payload and its conversion into a `Quote`.
//!
//! The provider answers with `{ "content": str, "originator": { "name": str } }`.
//! `originator` may be absent or `null`, and so may its `name`; in both cases the author
//! falls back to `Unknown`. A body without `content` is malformed.
use quote_common::{Quote, QuoteError, Result};
use serde::Deserialize;

/// Body of a successful random-quote response.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotePayload {
    /// Quote text.
    pub content: String,
    /// Person the quote is attributed to.
    pub originator: Option<Originator>,
}

/// Attribution block of the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Originator {
    /// Display name of the author.
    pub name: Option<String>,
}

impl QuotePayload {
    /// Converts the payload into a `Quote`, defaulting the author to `Unknown`.
    pub fn into_quote(self) -> Quote {
        let author = self.originator.and_then(|o| o.name);
        Quote::with_optional_author(self.content, author.as_deref())
    }
}

/// Decodes a response body into a `Quote`.
pub fn parse_payload(body: &str) -> Result<Quote> {
    let payload: QuotePayload =
        serde_json::from_str(body).map_err(|e| QuoteError::MalformedPayload(e.to_string()))?;
    Ok(payload.into_quote())
}
