//! Favorites collection and its persistence.
//!
//! Favorites are an ordered list of quotes without duplicates, compared by value. The
//! list is loaded once from the `favorites` storage slot and written back in full after
//! every mutation. A missing slot and an unparsable slot both start an empty list.
//! Writes are best-effort: a failed write is logged and the in-memory list stays
//! authoritative for the session.
use log::{debug, warn};
use quote_common::{Quote, Result};

use crate::storage::KeyValueStore;

/// Storage slot holding the serialized favorites.
pub const FAVORITES_KEY: &str = "favorites";

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The quote was appended.
    Added,
    /// The quote was removed.
    Removed,
}

/// The user's favorite quotes backed by a key-value store.
pub struct FavoritesStore {
    items: Vec<Quote>,
    storage: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Loads favorites from `storage`.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let items = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Quote>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    debug!("Ignoring unparsable favorites: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!("Ignoring unreadable favorites: {}", e);
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Favorites in insertion order.
    pub fn items(&self) -> &[Quote] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if a favorite equals `quote` by text and author.
    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.items.iter().any(|fav| fav.same_as(quote))
    }

    /// Removes `quote` if it is a favorite, appends it otherwise, then persists.
    pub fn toggle(&mut self, quote: &Quote) -> Toggled {
        let toggled = if self.is_favorite(quote) {
            self.items.retain(|fav| !fav.same_as(quote));
            Toggled::Removed
        } else {
            self.items.push(quote.clone());
            Toggled::Added
        };
        self.persist();
        toggled
    }

    /// Removes every favorite equal to `quote`, then persists.
    pub fn remove(&mut self, quote: &Quote) {
        self.items.retain(|fav| !fav.same_as(quote));
        self.persist();
    }

    /// Gives back the storage, e.g. to reload from it.
    #[cfg(test)]
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }

    fn persist(&mut self) {
        if let Err(e) = self.write() {
            warn!("Failed to save favorites: {}", e);
        }
    }

    fn write(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }
}
