//! Observable state containers for the adoption UI (auth session, favorites).
//!
//! Containers are plain values meant to be constructed once at application
//! start and passed by reference to whoever needs them; there are no global
//! singletons. All reads go through `snapshot`/`subscribe`, all writes
//! through the containers' own actions.

pub mod auth;
pub mod favorites;
pub mod store;

pub use auth::{AuthStore, Session};
pub use favorites::{FavoriteSet, FavoritesStore};
pub use store::{Store, Subscription};
