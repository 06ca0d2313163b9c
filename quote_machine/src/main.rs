//! Quote Machine — a terminal "quote of the moment" widget.
//!
//! It fetches a random quote from a remote provider, shows it in a random accent color,
//! and lets the user favorite, copy, share or look up the quote. Favorites survive
//! restarts in a JSON file under the data directory.
//!
//! Usage example (CLI):
//! ```bash
//! RAPIDAPI_KEY=... quote_machine --data-dir ~/.local/share/quote_machine
//! ```
//!
//! The main thread runs a single event loop multiplexing, with crossbeam `select!`:
//! - parsed stdin lines from the reader thread (`input`),
//! - completed fetches from the quote source's worker threads,
//! - toast deadlines from the notifier's timer,
//! - the Ctrl+C shutdown signal.
//!
//! All state changes happen on this thread, one event at a time.
#![warn(missing_docs)]
mod app;
mod args;
mod favorites;
mod host;
mod input;
mod links;
mod storage;
mod toast;
mod view;

use std::io;
use std::sync::Arc;

use crate::app::{App, Flow};
use crate::args::Args;
use crate::favorites::FavoritesStore;
use crate::host::{SystemClipboard, SystemNavigator};
use crate::input::{Input, spawn_stdin_reader};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::toast::{Notifier, ToastExpired};
use crate::view::{TerminalGuard, TerminalTheme, draw};
use clap::Parser;
use crossbeam_channel::{bounded, select, unbounded};
use log::{info, warn};
use quote_common::{QuoteError, Result};
use quote_source::{FetchOutcome, QuoteSource, RapidApiProvider};

/// Everything the event loop reacts to.
enum Event {
    Input(Input),
    Fetched(FetchOutcome),
    ToastExpired(ToastExpired),
    Shutdown,
}

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| QuoteError::Io(io::Error::other(e)))?;

    let _terminal = TerminalGuard::new(io::stdout());

    if args.api_key.is_none() {
        warn!("No API key configured; showing built-in quotes only");
    }
    let provider = RapidApiProvider::new(args.api_key.clone(), args.timeout())?;
    let mut source = QuoteSource::new(Arc::new(provider));
    if !args.no_theme {
        source = source.with_theme(Box::new(TerminalTheme));
    }

    let favorites = FavoritesStore::load(open_storage(&args)?);
    let mut app = App::new(
        source,
        favorites,
        Notifier::new(args.toast_lifetime()),
        Box::new(SystemClipboard),
        Box::new(SystemNavigator),
    );

    let (input_tx, input_rx) = unbounded::<Input>();
    spawn_stdin_reader(input_tx);
    let completions = app.source().completions();
    let expirations = app.notifier().expirations();

    app.mount();
    draw(&app.screen())?;

    loop {
        let event = select! {
            recv(input_rx) -> msg => msg.map(Event::Input).unwrap_or(Event::Shutdown),
            recv(completions) -> msg => msg.map(Event::Fetched).unwrap_or(Event::Shutdown),
            recv(expirations) -> msg => msg.map(Event::ToastExpired).unwrap_or(Event::Shutdown),
            recv(shutdown_rx) -> _ => Event::Shutdown,
        };

        match event {
            Event::Input(input) => {
                if app.handle(input) == Flow::Quit {
                    break;
                }
            }
            Event::Fetched(outcome) => app.apply_fetch(outcome),
            Event::ToastExpired(expired) => {
                if !app.on_toast_expired(expired) {
                    continue;
                }
            }
            Event::Shutdown => break,
        }
        draw(&app.screen())?;
    }

    info!("Quote Machine stopped with {} favorites", app.favorites().len());
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

/// Picks the favorites backing store from the arguments.
fn open_storage(args: &Args) -> Result<Box<dyn KeyValueStore>> {
    if args.no_persist {
        info!("Favorites are kept in memory only");
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = FileStore::open(args.data_dir()?)?;
    info!("Favorites directory: {}", store.dir().display());
    Ok(Box::new(store))
}
