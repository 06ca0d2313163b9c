//! Result of a single fetch.
//!
//! Every fetch ends in a `FetchOutcome`: either the provider's quote or a quote drawn
//! from the fallback corpus, always paired with a freshly drawn accent color. Both draws
//! are uniform and independent of the previous state, so repeats are possible.

use log::error;
use quote_common::fallback::{FALLBACK_LEN, fallback_quote, first_fallback};
use quote_common::{AccentColor, PALETTE, Quote, Result};
use rand::Rng;

/// Where the quote of an outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The remote provider answered successfully.
    Remote,
    /// The provider failed and the fallback corpus was sampled.
    Fallback,
}

/// Quote and color to display after a fetch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Quote to display.
    pub quote: Quote,
    /// Accent color to display it with.
    pub color: AccentColor,
    /// Source of `quote`.
    pub origin: Origin,
}

impl FetchOutcome {
    /// Turns a provider result into an outcome, never failing.
    ///
    /// Errors are logged and replaced by a uniformly sampled fallback quote.
    pub fn resolve<R: Rng + ?Sized>(result: Result<Quote>, rng: &mut R) -> Self {
        let color = random_color(rng);
        match result {
            Ok(quote) => FetchOutcome {
                quote,
                color,
                origin: Origin::Remote,
            },
            Err(e) => {
                error!("Error fetching quote, using fallback: {}", e);
                FetchOutcome {
                    quote: random_fallback(rng),
                    color,
                    origin: Origin::Fallback,
                }
            }
        }
    }
}

/// Draws a palette color uniformly at random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> AccentColor {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// Draws a fallback quote uniformly at random.
pub fn random_fallback<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    fallback_quote(rng.random_range(0..FALLBACK_LEN)).unwrap_or_else(first_fallback)
}
