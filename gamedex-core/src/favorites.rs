//! Reconciliation between live catalog games and their persisted favorite
//! form. Two structurally different shapes, one explicit total mapping;
//! no I/O happens here.

use gamedex_api::{CatalogGame, CatalogGameDetail, PlatformAssociation};

/// A game persisted by the user, independent of live catalog availability.
/// Created and deleted whole; never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteGame {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub metacritic: i32,
    pub image: Option<Vec<u8>>,
    pub platforms: Vec<FavoritePlatform>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritePlatform {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub released_at: Option<String>,
}

impl FavoriteGame {
    /// Persisted form of a list/search result, with optionally captured
    /// image bytes. Metacritic defaults to 0 when the source had none.
    pub fn from_catalog(game: &CatalogGame, image: Option<Vec<u8>>) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            slug: game.slug.clone(),
            metacritic: game.metacritic.unwrap_or(0),
            image,
            platforms: map_platforms(&game.platforms),
        }
    }

    /// Same mapping from the detail shape; the detail screen favorites too.
    pub fn from_detail(detail: &CatalogGameDetail, image: Option<Vec<u8>>) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            slug: detail.slug.clone(),
            metacritic: detail.metacritic.unwrap_or(0),
            image,
            platforms: map_platforms(&detail.platforms),
        }
    }
}

fn map_platforms(associations: &[PlatformAssociation]) -> Vec<FavoritePlatform> {
    associations
        .iter()
        .map(|assoc| FavoritePlatform {
            id: assoc.platform.id,
            name: assoc.platform.name.clone(),
            slug: assoc.platform.slug.clone(),
            released_at: assoc.released_at.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedex_api::Platform;

    fn catalog_game() -> CatalogGame {
        CatalogGame {
            id: 3498,
            slug: "grand-theft-auto-v".to_string(),
            name: "Grand Theft Auto V".to_string(),
            released: Some("2013-09-17".to_string()),
            tba: false,
            background_image: Some("https://media.rawg.io/gta5.jpg".to_string()),
            rating: 4.47,
            metacritic: None,
            updated: "2021-10-04T10:18:47".to_string(),
            esrb_rating: None,
            platforms: vec![PlatformAssociation {
                platform: Platform {
                    id: 4,
                    slug: "pc".to_string(),
                    name: "PC".to_string(),
                },
                released_at: Some("2013-09-17".to_string()),
            }],
        }
    }

    #[test]
    fn mapping_copies_identity_and_defaults_metacritic() {
        let favorite = FavoriteGame::from_catalog(&catalog_game(), Some(vec![1, 2, 3]));
        assert_eq!(favorite.id, 3498);
        assert_eq!(favorite.slug, "grand-theft-auto-v");
        assert_eq!(favorite.metacritic, 0);
        assert_eq!(favorite.image.as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(favorite.platforms.len(), 1);
        assert_eq!(favorite.platforms[0].id, 4);
        assert_eq!(favorite.platforms[0].released_at.as_deref(), Some("2013-09-17"));
    }

    #[test]
    fn mapping_is_pure_and_idempotent() {
        let game = catalog_game();
        let a = FavoriteGame::from_catalog(&game, Some(vec![9]));
        let b = FavoriteGame::from_catalog(&game, Some(vec![9]));
        assert_eq!(a, b);
    }

    #[test]
    fn detail_shape_maps_the_same_way() {
        let detail = CatalogGameDetail {
            id: 3498,
            slug: "grand-theft-auto-v".to_string(),
            name: "Grand Theft Auto V".to_string(),
            description: "<p>Open world.</p>".to_string(),
            metacritic: Some(92),
            released: Some("2013-09-17".to_string()),
            background_image: None,
            platforms: catalog_game().platforms,
        };
        let favorite = FavoriteGame::from_detail(&detail, None);
        assert_eq!(favorite.id, 3498);
        assert_eq!(favorite.metacritic, 92);
        assert!(favorite.image.is_none());
        assert_eq!(favorite.platforms.len(), 1);
    }
}
