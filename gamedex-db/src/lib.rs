//! SQLite persistence for the favorites collection.
//!
//! Provides schema creation and the [`FavoritesStore`]: sorted retrieval,
//! point lookup, insert, delete, the favorite toggle entry point, and a
//! change-notification feed (via rusqlite with bundled feature).

pub mod schema;
pub mod store;

pub use schema::{SchemaError, open_database, open_memory};
pub use store::{FavoritesEvent, FavoritesStore, StoreError, ToggleOutcome};
