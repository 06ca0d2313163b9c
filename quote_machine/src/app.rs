//! Widget orchestration.
//!
//! `App` ties the quote source, the favorites store, the notifier and the host
//! collaborators together. Every user action runs against the quote currently exposed by
//! the source; state-changing actions end with a toast. Errors from the clipboard and the
//! URL opener are logged and never interrupt the session.
use log::{debug, info, warn};
use quote_common::Quote;
use quote_source::{FetchOutcome, QuoteSource};

use crate::favorites::{FavoritesStore, Toggled};
use crate::host::{Clipboard, Navigator};
use crate::input::{Action, Input, Key, help_lines};
use crate::links::{author_url, search_url, share_url};
use crate::toast::{Notifier, ToastExpired};
use crate::view::Screen;

pub const ADDED_MESSAGE: &str = "Added to favorites";
pub const REMOVED_MESSAGE: &str = "Removed from favorites";
pub const COPIED_MESSAGE: &str = "Quote copied!";

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Element holding keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    None,
    Author,
}

pub struct App {
    source: QuoteSource,
    favorites: FavoritesStore,
    notifier: Notifier,
    clipboard: Box<dyn Clipboard>,
    navigator: Box<dyn Navigator>,
    panel_open: bool,
    focus: Focus,
    hint: Option<String>,
}

impl App {
    pub fn new(
        source: QuoteSource,
        favorites: FavoritesStore,
        notifier: Notifier,
        clipboard: Box<dyn Clipboard>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            source,
            favorites,
            notifier,
            clipboard,
            navigator,
            panel_open: false,
            focus: Focus::None,
            hint: None,
        }
    }

    /// Starts the initial fetch.
    pub fn mount(&self) {
        info!("Mounting with {} favorites", self.favorites.len());
        self.source.request_fetch();
    }

    pub fn source(&self) -> &QuoteSource {
        &self.source
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Whether the displayed quote is a favorite.
    pub fn is_favorite(&self) -> bool {
        self.favorites.is_favorite(self.source.quote())
    }

    /// "New Quote".
    pub fn new_quote(&self) {
        self.source.request_fetch();
    }

    /// Applies a completed fetch.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        self.source.apply(outcome);
    }

    /// Feeds a toast deadline back to the notifier.
    pub fn on_toast_expired(&mut self, expired: ToastExpired) -> bool {
        self.notifier.expire(expired)
    }

    pub fn toggle_favorite(&mut self) {
        let quote = self.source.quote().clone();
        let message = match self.favorites.toggle(&quote) {
            Toggled::Added => ADDED_MESSAGE,
            Toggled::Removed => REMOVED_MESSAGE,
        };
        self.notifier.show(message);
    }

    /// Removes `quote` from favorites, whatever quote is displayed.
    pub fn remove_favorite(&mut self, quote: &Quote) {
        self.favorites.remove(quote);
        self.notifier.show(REMOVED_MESSAGE);
    }

    /// Removes the favorite at `index` in panel order. Returns `false` if out of range.
    pub fn remove_favorite_at(&mut self, index: usize) -> bool {
        match self.favorites.items().get(index).cloned() {
            Some(quote) => {
                self.remove_favorite(&quote);
                true
            }
            None => false,
        }
    }

    pub fn copy_to_clipboard(&mut self) {
        let text = self.source.quote().to_string();
        if let Err(e) = self.clipboard.write_text(&text) {
            warn!("Failed to copy quote: {}", e);
        }
        self.notifier.show(COPIED_MESSAGE);
    }

    pub fn share_on_social(&mut self) {
        let url = share_url(self.source.quote());
        self.open(&url);
    }

    pub fn search_quote(&mut self) {
        let url = search_url(self.source.quote());
        self.open(&url);
    }

    pub fn search_author(&mut self) {
        let url = author_url(self.source.quote());
        self.open(&url);
    }

    /// Keyboard activation of the focused element.
    pub fn press_key(&mut self, key: Key) {
        match self.focus {
            Focus::Author => {
                debug!("{:?} on author", key);
                self.search_author();
            }
            Focus::None => debug!("{:?} with nothing focused", key),
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.notifier.dismiss();
    }

    /// Dispatches one line of input.
    pub fn handle(&mut self, input: Input) -> Flow {
        self.hint = None;
        let action = match input {
            Input::Key(key) => {
                self.press_key(key);
                return Flow::Continue;
            }
            Input::Invalid(reason) => {
                self.hint = Some(format!("{} (type `help`)", reason));
                return Flow::Continue;
            }
            Input::Action(action) => action,
        };

        self.focus = Focus::None;
        match action {
            Action::NewQuote => self.new_quote(),
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::Copy => self.copy_to_clipboard(),
            Action::Share => self.share_on_social(),
            Action::SearchQuote => self.search_quote(),
            Action::SearchAuthor => self.search_author(),
            Action::FocusAuthor => self.focus = Focus::Author,
            Action::TogglePanel => self.panel_open = !self.panel_open,
            Action::RemoveFavorite(index) => {
                if !self.remove_favorite_at(index) {
                    self.hint = Some(format!("no favorite number {}", index + 1));
                }
            }
            Action::DismissToast => self.dismiss_toast(),
            Action::Help => self.hint = Some(help_lines().join("\n")),
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Snapshot for rendering.
    pub fn screen(&self) -> Screen<'_> {
        Screen {
            quote: self.source.quote(),
            color: self.source.color(),
            ambient: self.source.has_theme().then(|| self.source.color()),
            is_favorite: self.is_favorite(),
            author_focused: self.focus == Focus::Author,
            favorites: self.favorites.items(),
            panel_open: self.panel_open,
            toast: self.notifier.visible_message(),
            hint: self.hint.as_deref(),
        }
    }

    fn open(&mut self, url: &str) {
        debug!("Opening {}", url);
        if let Err(e) = self.navigator.open(url) {
            warn!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FAVORITES_KEY;
    use crate::storage::KeyValueStore;
    use crate::toast::TOAST_LIFETIME;
    use quote_common::fallback::first_fallback;
    use quote_common::{QuoteError, Result};
    use quote_source::{Origin, QuoteProvider};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct BodyProvider(&'static str);

    impl QuoteProvider for BodyProvider {
        fn fetch(&self) -> Result<Quote> {
            quote_source::model::payload::parse_payload(self.0)
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<HashMap<String, String>>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock()?.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.lock()?.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl Clipboard for Recorder {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0.lock()?.push(text.to_string());
            Ok(())
        }
    }

    impl Navigator for Recorder {
        fn open(&mut self, url: &str) -> Result<()> {
            self.0.lock()?.push(url.to_string());
            Ok(())
        }
    }

    struct BrokenHost;

    impl Clipboard for BrokenHost {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(QuoteError::Clipboard("no clipboard".to_string()))
        }
    }

    impl Navigator for BrokenHost {
        fn open(&mut self, url: &str) -> Result<()> {
            Err(QuoteError::Navigation(format!("cannot open {}", url)))
        }
    }

    struct Harness {
        app: App,
        store: SharedStore,
        clipboard: Recorder,
        navigator: Recorder,
    }

    fn harness(body: &'static str, saved: Option<&str>) -> Harness {
        let store = SharedStore::default();
        if let Some(saved) = saved {
            store.clone().set(FAVORITES_KEY, saved).unwrap();
        }
        let clipboard = Recorder::default();
        let navigator = Recorder::default();
        let app = App::new(
            QuoteSource::new(Arc::new(BodyProvider(body))),
            FavoritesStore::load(Box::new(store.clone())),
            Notifier::new(TOAST_LIFETIME),
            Box::new(clipboard.clone()),
            Box::new(navigator.clone()),
        );
        Harness {
            app,
            store,
            clipboard,
            navigator,
        }
    }

    const HELLO: &str = r#"{"content":"Hello","originator":{"name":"Alice"}}"#;

    fn fetch(app: &mut App) {
        let completions = app.source().completions();
        app.new_quote();
        let outcome = completions.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.origin, Origin::Remote);
        app.apply_fetch(outcome);
    }

    #[test]
    fn mount_fetches_exactly_once() {
        let h = harness(HELLO, None);
        let completions = h.app.source().completions();
        h.app.mount();

        let outcome = completions.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.origin, Origin::Remote);
        assert_eq!(outcome.quote, Quote::new("Hello", "Alice"));
        assert!(completions.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn shows_first_fallback_until_the_fetch_lands() {
        let mut h = harness(HELLO, None);
        assert_eq!(h.app.source().quote(), &first_fallback());
        fetch(&mut h.app);
        assert_eq!(h.app.source().quote(), &Quote::new("Hello", "Alice"));
    }

    #[test]
    fn toggle_favorite_persists_and_notifies() {
        let mut h = harness(HELLO, None);
        fetch(&mut h.app);

        h.app.toggle_favorite();
        assert!(h.app.is_favorite());
        assert_eq!(h.app.notifier().visible_message(), Some(ADDED_MESSAGE));
        assert_eq!(
            h.store.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"[{"text":"Hello","author":"Alice"}]"#)
        );

        h.app.toggle_favorite();
        assert!(!h.app.is_favorite());
        assert_eq!(h.app.notifier().visible_message(), Some(REMOVED_MESSAGE));
        assert_eq!(h.store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn removing_a_favorite_from_the_panel() {
        let saved = r#"[{"text":"Be yourself...","author":"Oscar Wilde"}]"#;
        let mut h = harness(HELLO, Some(saved));
        assert_eq!(h.app.favorites().len(), 1);

        h.app.remove_favorite(&Quote::new("Be yourself...", "Oscar Wilde"));
        assert!(h.app.favorites().is_empty());
        assert_eq!(h.store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(h.app.notifier().visible_message(), Some(REMOVED_MESSAGE));
    }

    #[test]
    fn remove_by_index_reports_out_of_range() {
        let saved = r#"[{"text":"a","author":"b"}]"#;
        let mut h = harness(HELLO, Some(saved));
        assert_eq!(h.app.handle(Input::Action(Action::RemoveFavorite(3))), Flow::Continue);
        assert_eq!(h.app.favorites().len(), 1);
        assert!(h.app.screen().hint.unwrap().contains("no favorite number 4"));

        h.app.handle(Input::Action(Action::RemoveFavorite(0)));
        assert!(h.app.favorites().is_empty());
    }

    #[test]
    fn copy_writes_quote_with_em_dash() {
        let mut h = harness(HELLO, None);
        fetch(&mut h.app);
        h.app.copy_to_clipboard();
        assert_eq!(h.clipboard.take(), ["\"Hello\" — Alice"]);
        assert_eq!(h.app.notifier().visible_message(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn links_open_through_the_navigator() {
        let mut h = harness(HELLO, None);
        fetch(&mut h.app);
        h.app.share_on_social();
        h.app.search_quote();
        h.app.search_author();
        assert_eq!(
            h.navigator.take(),
            [
                "https://twitter.com/intent/tweet?hashtags=quotes&text=%22Hello%22%20%E2%80%94%20Alice",
                "https://www.google.com/search?q=Hello",
                "https://en.wikipedia.org/wiki/Alice",
            ]
        );
        assert_eq!(h.app.notifier().visible_message(), None);
    }

    #[test]
    fn enter_or_space_on_focused_author_opens_it() {
        let mut h = harness(HELLO, None);
        fetch(&mut h.app);

        h.app.handle(Input::Key(Key::Enter));
        assert!(h.navigator.take().is_empty());

        h.app.handle(Input::Action(Action::FocusAuthor));
        assert!(h.app.screen().author_focused);
        h.app.handle(Input::Key(Key::Enter));
        h.app.handle(Input::Key(Key::Space));
        assert_eq!(h.navigator.take().len(), 2);

        h.app.handle(Input::Action(Action::TogglePanel));
        h.app.handle(Input::Key(Key::Enter));
        assert!(h.navigator.take().is_empty());
    }

    #[test]
    fn host_failures_do_not_interrupt() {
        let mut app = App::new(
            QuoteSource::new(Arc::new(BodyProvider(HELLO))),
            FavoritesStore::load(Box::new(SharedStore::default())),
            Notifier::new(TOAST_LIFETIME),
            Box::new(BrokenHost),
            Box::new(BrokenHost),
        );
        app.copy_to_clipboard();
        app.share_on_social();
        assert_eq!(app.notifier().visible_message(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn panel_and_toast_controls() {
        let mut h = harness(HELLO, None);
        assert_eq!(h.app.screen().panel_label(), "Show Favorites (0)");
        h.app.handle(Input::Action(Action::TogglePanel));
        assert_eq!(h.app.screen().panel_label(), "Hide Favorites");

        h.app.handle(Input::Action(Action::ToggleFavorite));
        assert_eq!(h.app.screen().toast, Some(ADDED_MESSAGE));
        h.app.handle(Input::Action(Action::DismissToast));
        assert_eq!(h.app.screen().toast, None);
    }

    #[test]
    fn quit_and_invalid_input() {
        let mut h = harness(HELLO, None);
        assert_eq!(h.app.handle(Input::Invalid("unknown command: x".to_string())), Flow::Continue);
        assert!(h.app.screen().hint.unwrap().contains("unknown command: x"));
        assert_eq!(h.app.handle(Input::Action(Action::Help)), Flow::Continue);
        assert!(h.app.screen().hint.unwrap().contains("remove <n>"));
        assert_eq!(h.app.handle(Input::Action(Action::Quit)), Flow::Quit);
    }
}
