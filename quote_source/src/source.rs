//! The quote source: current quote, current color, and the fetch operation.
//!
//! Concurrency model:
//! - `request_fetch` runs the provider call on its own worker thread and delivers the
//!   resolved `FetchOutcome` over a `crossbeam_channel`. The owner drains
//!   [`QuoteSource::completions`] on its event loop and hands each outcome to
//!   [`QuoteSource::apply`], so state only ever changes on the owner's thread.
//! - Requests are not deduplicated. Outcomes are applied in completion order, so the
//!   most recently *completed* fetch wins even if it was issued first.
//! - A fetch never fails from the caller's point of view; see `FetchOutcome::resolve`.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info};
use quote_common::fallback::first_fallback;
use quote_common::{AccentColor, Quote};

use crate::model::outcome::{FetchOutcome, Origin};
use crate::provider::QuoteProvider;
use crate::theme::ThemeSink;

/// Owner of the displayed quote and accent color.
pub struct QuoteSource {
    provider: Arc<dyn QuoteProvider>,
    quote: Quote,
    color: AccentColor,
    theme: Option<Box<dyn ThemeSink>>,
    completions_tx: Sender<FetchOutcome>,
    completions_rx: Receiver<FetchOutcome>,
}

impl QuoteSource {
    /// Creates a source showing the first fallback quote in the first palette color.
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        let (completions_tx, completions_rx) = unbounded();
        Self {
            provider,
            quote: first_fallback(),
            color: AccentColor::default(),
            theme: None,
            completions_tx,
            completions_rx,
        }
    }

    /// Routes every newly chosen color to `sink` as the ambient text color.
    pub fn with_theme(mut self, sink: Box<dyn ThemeSink>) -> Self {
        self.theme = Some(sink);
        self
    }

    /// Whether fetched colors are published to an ambient theme.
    pub fn has_theme(&self) -> bool {
        self.theme.is_some()
    }

    /// Currently displayed quote.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Currently displayed accent color.
    pub fn color(&self) -> AccentColor {
        self.color
    }

    /// Issues a fetch on a worker thread. The outcome arrives on [`Self::completions`].
    pub fn request_fetch(&self) {
        let provider = Arc::clone(&self.provider);
        let tx = self.completions_tx.clone();
        thread::spawn(move || {
            let outcome = FetchOutcome::resolve(provider.fetch(), &mut rand::rng());
            if tx.send(outcome).is_err() {
                debug!("Quote source dropped before fetch completed");
            }
        });
    }

    /// Channel of completed fetches, in completion order.
    pub fn completions(&self) -> Receiver<FetchOutcome> {
        self.completions_rx.clone()
    }

    /// Fetches on the calling thread and applies the outcome.
    pub fn fetch_quote_now(&mut self) -> Origin {
        let outcome = FetchOutcome::resolve(self.provider.fetch(), &mut rand::rng());
        let origin = outcome.origin;
        self.apply(outcome);
        origin
    }

    /// Makes `outcome` the displayed state and publishes its color to the theme sink.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        info!("Showing quote by {} ({:?})", outcome.quote.author, outcome.origin);
        self.quote = outcome.quote;
        self.color = outcome.color;
        if let Some(theme) = self.theme.as_mut() {
            theme.apply(self.color);
        }
    }
}
