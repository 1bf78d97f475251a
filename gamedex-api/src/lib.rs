//! HTTP client for the RAWG video-game catalog API.
//!
//! Builds requests for the six curated category feeds, free-text search,
//! and per-game detail, decodes the JSON payloads into typed responses,
//! and downloads raw image bytes from the CDN URLs those payloads carry.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

pub use client::CatalogClient;
pub use endpoints::{BASE_URL, Category, DEFAULT_PAGE_SIZE};
pub use error::ApiError;
pub use types::{
    CatalogGame, CatalogGameDetail, EsrbRating, GamesPage, Platform, PlatformAssociation,
};
