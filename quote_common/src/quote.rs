//! The `Quote` value type.
//!
//! A quote is a plain `(text, author)` pair. Equality is structural over both fields,
//! so two quotes with the same text and author are the same entity regardless of
//! where they came from. Quotes are stored as JSON objects `{"text", "author"}`.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Author used when the provider does not name one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A quote and its author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body.
    pub text: String,
    /// Author name.
    pub author: String,
}

impl Quote {
    /// Creates a new quote.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Builds a quote from provider fields, substituting [`UNKNOWN_AUTHOR`] when the
    /// author is missing or empty. Any other name is kept verbatim.
    pub fn with_optional_author(text: impl Into<String>, author: Option<&str>) -> Self {
        let author = author
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);
        Quote::new(text, author)
    }

    /// Value equality on `(text, author)`; the predicate favorites membership uses.
    pub fn same_as(&self, other: &Quote) -> bool {
        self == other
    }

    /// Author for display, `Unknown` when empty.
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            UNKNOWN_AUTHOR
        } else {
            &self.author
        }
    }
}

/// Renders as `"<text>" — <author>`, the form used for copying and sharing.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.author)
    }
}
