//! The durable favorites collection and its change-notification feed.

use std::path::Path;

use gamedex_core::{FavoriteGame, FavoritePlatform};
use rusqlite::{Connection, params};
use thiserror::Error;
use tokio::sync::broadcast;

use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Published after each committed mutation. Subscribers re-render favorite
/// markers from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesEvent {
    Added(i64),
    Removed(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Durable collection of favorite games with nested platform records.
///
/// Favorites are inserted and deleted whole, never updated in place.
/// Membership is always answered by id lookup against this store.
pub struct FavoritesStore {
    conn: Connection,
    events: broadcast::Sender<FavoritesEvent>,
}

impl FavoritesStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::with_conn(schema::open_database(path)?))
    }

    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self::with_conn(schema::open_memory()?))
    }

    fn with_conn(conn: Connection) -> Self {
        let (events, _) = broadcast::channel(64);
        Self { conn, events }
    }

    /// Subscribe to mutation events. Only mutations after this call are
    /// delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.events.subscribe()
    }

    pub fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )?;
        Ok(found)
    }

    /// Insert a favorite with its platform records. Callers gate on
    /// [`FavoritesStore::exists`] first; the id is the primary key.
    pub fn insert(&self, favorite: &FavoriteGame) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO favorites (id, name, slug, metacritic, image)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                favorite.id,
                favorite.name,
                favorite.slug,
                favorite.metacritic,
                favorite.image,
            ],
        )?;
        for platform in &favorite.platforms {
            self.conn.execute(
                "INSERT INTO favorite_platforms (favorite_id, platform_id, name, slug, released_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    favorite.id,
                    platform.id,
                    platform.name,
                    platform.slug,
                    platform.released_at,
                ],
            )?;
        }
        let _ = self.events.send(FavoritesEvent::Added(favorite.id));
        Ok(())
    }

    /// Delete by id. Returns whether anything was removed; an absent id is
    /// a no-op, not an error, and publishes nothing.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM favorites WHERE id = ?1", [id])?;
        if changed == 0 {
            return Ok(false);
        }
        let _ = self.events.send(FavoritesEvent::Removed(id));
        Ok(true)
    }

    /// Point lookup with platform records attached.
    pub fn get(&self, id: i64) -> Result<Option<FavoriteGame>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, slug, metacritic, image FROM favorites WHERE id = ?1",
        )?;
        let result = stmt.query_row([id], row_to_favorite);
        match result {
            Ok(mut favorite) => {
                favorite.platforms = self.platforms_for(favorite.id)?;
                Ok(Some(favorite))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All favorites sorted ascending by name, platform records attached.
    pub fn list_by_name(&self) -> Result<Vec<FavoriteGame>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, slug, metacritic, image FROM favorites ORDER BY name ASC",
        )?;
        let rows = stmt.query_map([], row_to_favorite)?;
        let mut favorites: Vec<FavoriteGame> = rows.collect::<Result<_, _>>()?;
        for favorite in &mut favorites {
            favorite.platforms = self.platforms_for(favorite.id)?;
        }
        Ok(favorites)
    }

    /// The single mutation entry point for every favorite toggle: insert the
    /// reconciled favorite when its id is absent, delete it when present.
    pub fn toggle(&self, favorite: FavoriteGame) -> Result<ToggleOutcome, StoreError> {
        if self.exists(favorite.id)? {
            self.delete(favorite.id)?;
            Ok(ToggleOutcome::Removed)
        } else {
            self.insert(&favorite)?;
            Ok(ToggleOutcome::Added)
        }
    }

    fn platforms_for(&self, id: i64) -> Result<Vec<FavoritePlatform>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT platform_id, name, slug, released_at
             FROM favorite_platforms WHERE favorite_id = ?1",
        )?;
        let rows = stmt.query_map([id], |row| {
            Ok(FavoritePlatform {
                id: row.get(0)?,
                name: row.get(1)?,
                slug: row.get(2)?,
                released_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}

fn row_to_favorite(row: &rusqlite::Row<'_>) -> rusqlite::Result<FavoriteGame> {
    Ok(FavoriteGame {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        metacritic: row.get(3)?,
        image: row.get(4)?,
        platforms: Vec::new(),
    })
}
