use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gamedex_api::{ApiError, CatalogClient};

/// Session image cache: downloaded bytes keyed by game id, at most one blob
/// per id. Unbounded; catalog pages are small and the cache lives only for
/// the session.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<i64, Vec<u8>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<&[u8]> {
        self.entries.get(&id).map(Vec::as_slice)
    }

    pub fn put(&mut self, id: i64, bytes: Vec<u8>) {
        self.entries.insert(id, bytes);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes for `id`, downloading from `url` on a miss. A hit skips the
    /// network entirely; a failed download leaves the entry vacant so the
    /// next display retries.
    pub async fn fetch(
        &mut self,
        client: &CatalogClient,
        id: i64,
        url: &str,
    ) -> Result<&[u8], ApiError> {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => {
                let bytes = client.download_image(url).await?;
                Ok(entry.insert(bytes).as_slice())
            }
        }
    }
}
