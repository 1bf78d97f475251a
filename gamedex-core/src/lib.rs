//! Catalog aggregation and favorites core.
//!
//! Per-category pagination state machines, the session image cache, and the
//! pure mapping from live catalog games to their persisted favorite form.
//! All mutable state here is owned by the caller and mutated from a single
//! task; only the network transfers themselves run in the background.

pub mod favorites;
pub mod images;
pub mod pagination;

pub use favorites::{FavoriteGame, FavoritePlatform};
pub use images::ImageCache;
pub use pagination::{CategoryPager, HomeFeeds, SearchOutcome, SearchPager};
