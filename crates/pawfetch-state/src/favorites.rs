//! Favorites state: single source of truth for the favorited dog IDs.

use std::collections::HashSet;
use std::sync::Arc;

use crate::store::{Store, Subscription};

/// Immutable snapshot of the favorited dog IDs.
pub type FavoriteSet = HashSet<String>;

/// Observable container for the set of favorited dog IDs.
///
/// Every mutation publishes a fresh set; snapshots handed out earlier never
/// change underneath a subscriber.
pub struct FavoritesStore {
    store: Store<FavoriteSet>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    /// Creates a store with no favorites.
    pub fn new() -> Self {
        Self {
            store: Store::new(FavoriteSet::new()),
        }
    }

    /// Adds `id` to the set if absent, removes it if present.
    pub fn toggle_favorite(&self, id: &str) {
        self.store.update(|favorites| {
            let mut next = favorites.clone();
            if !next.remove(id) {
                next.insert(id.to_string());
            }
            next
        });
    }

    /// Resets to the empty set.
    pub fn clear_favorites(&self) {
        self.store.replace(FavoriteSet::new());
    }

    /// Whether `id` is currently favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.snapshot().contains(id)
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<FavoriteSet> {
        self.store.snapshot()
    }

    /// Registers `callback` to receive the current snapshot immediately and
    /// every subsequent change of the set.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Arc<FavoriteSet>) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Test: final membership equals initial membership XOR toggle-count parity.
    #[test]
    fn test_toggle_parity() {
        for toggles in 0..6 {
            let favorites = FavoritesStore::new();
            for _ in 0..toggles {
                favorites.toggle_favorite("d1");
            }
            assert_eq!(
                favorites.is_favorite("d1"),
                toggles % 2 == 1,
                "after {toggles} toggles"
            );
        }
    }

    /// Test: toggling dog-1, dog-2, dog-1 leaves exactly dog-2.
    #[test]
    fn test_toggle_sequence_scenario() {
        let favorites = FavoritesStore::new();
        favorites.toggle_favorite("dog-1");
        favorites.toggle_favorite("dog-2");
        favorites.toggle_favorite("dog-1");

        let snapshot = favorites.snapshot();
        assert_eq!(*snapshot, FavoriteSet::from(["dog-2".to_string()]));
    }

    /// Test: clear always yields the empty set and is idempotent.
    #[test]
    fn test_clear_is_idempotent() {
        let favorites = FavoritesStore::new();
        favorites.toggle_favorite("d1");
        favorites.toggle_favorite("d2");

        favorites.clear_favorites();
        assert!(favorites.snapshot().is_empty());

        favorites.clear_favorites();
        assert!(favorites.snapshot().is_empty());
    }

    /// Test: toggling publishes a new set instead of mutating the old one.
    #[test]
    fn test_toggle_is_copy_on_write() {
        let favorites = FavoritesStore::new();
        favorites.toggle_favorite("d1");

        let before = favorites.snapshot();
        favorites.toggle_favorite("d2");

        assert_eq!(*before, FavoriteSet::from(["d1".to_string()]));
        assert!(favorites.is_favorite("d2"));
    }

    /// Test: subscribers see the empty set first, then each mutation's result.
    #[test]
    fn test_subscriber_observes_each_mutation() {
        let favorites = FavoritesStore::new();
        let sizes = Arc::new(Mutex::new(Vec::new()));

        let _sub = favorites.subscribe({
            let sizes = Arc::clone(&sizes);
            move |snapshot| sizes.lock().unwrap().push(snapshot.len())
        });
        favorites.toggle_favorite("d1");
        favorites.toggle_favorite("d2");
        favorites.clear_favorites();

        assert_eq!(*sizes.lock().unwrap(), vec![0, 1, 2, 0]);
    }
}
