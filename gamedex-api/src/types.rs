use serde::Deserialize;

/// One page of a games list or search response.
#[derive(Debug, Clone, Deserialize)]
pub struct GamesPage {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<CatalogGame>,
}

/// A game as it appears in list and search results. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogGame {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub tba: bool,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub esrb_rating: Option<EsrbRating>,
    #[serde(default)]
    pub platforms: Vec<PlatformAssociation>,
}

/// "This game released on this platform on this date."
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlatformAssociation {
    pub platform: Platform,
    #[serde(default)]
    pub released_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EsrbRating {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

/// Detail payload for a single game. A distinct shape from [`CatalogGame`]:
/// it carries a free-text description but no rating/tba/updated fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogGameDetail {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub platforms: Vec<PlatformAssociation>,
}

impl CatalogGameDetail {
    /// Description stripped of HTML tags, with newlines collapsed to spaces
    /// and the apostrophe entity decoded.
    pub fn plain_description(&self) -> String {
        let mut out = String::with_capacity(self.description.len());
        let mut in_tag = false;
        for ch in self.description.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                '\n' if !in_tag => out.push(' '),
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.replace("&#39;", "'")
    }

    /// Release date rendered `DD/MM/YYYY`, or `None` when unreleased or the
    /// upstream string isn't `YYYY-MM-DD`.
    pub fn display_release_date(&self) -> Option<String> {
        let released = self.released.as_deref()?;
        let mut parts = released.split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return None;
        }
        if !is_digits(year) || !is_digits(month) || !is_digits(day) {
            return None;
        }
        Some(format!("{day}/{month}/{year}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_JSON: &str = r#"{
        "count": 873,
        "next": "https://api.rawg.io/api/games?page=2",
        "previous": null,
        "results": [
            {
                "id": 3498,
                "slug": "grand-theft-auto-v",
                "name": "Grand Theft Auto V",
                "released": "2013-09-17",
                "tba": false,
                "background_image": "https://media.rawg.io/media/games/gta5.jpg",
                "rating": 4.47,
                "metacritic": 92,
                "updated": "2021-10-04T10:18:47",
                "esrb_rating": {"id": 4, "slug": "mature", "name": "Mature"},
                "platforms": [
                    {
                        "platform": {"id": 4, "slug": "pc", "name": "PC"},
                        "released_at": "2013-09-17"
                    }
                ]
            },
            {
                "id": 999,
                "slug": "unannounced",
                "name": "Unannounced",
                "released": null,
                "tba": true,
                "background_image": null,
                "rating": 0.0,
                "metacritic": null,
                "updated": "2021-01-01T00:00:00",
                "esrb_rating": null,
                "platforms": []
            }
        ]
    }"#;

    #[test]
    fn decodes_a_list_page() {
        let page: GamesPage = serde_json::from_str(LIST_JSON).unwrap();
        assert_eq!(page.count, 873);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);

        let gta = &page.results[0];
        assert_eq!(gta.id, 3498);
        assert_eq!(gta.metacritic, Some(92));
        assert_eq!(gta.platforms[0].platform.slug, "pc");
        assert_eq!(gta.platforms[0].released_at.as_deref(), Some("2013-09-17"));
        assert_eq!(gta.esrb_rating.as_ref().unwrap().name, "Mature");

        let tba = &page.results[1];
        assert!(tba.tba);
        assert!(tba.released.is_none());
        assert!(tba.metacritic.is_none());
        assert!(tba.platforms.is_empty());
    }

    #[test]
    fn decodes_a_detail_payload() {
        let json = r#"{
            "id": 3498,
            "slug": "grand-theft-auto-v",
            "name": "Grand Theft Auto V",
            "description": "<p>Rockstar&#39;s open world.</p>\nThree protagonists.",
            "metacritic": 92,
            "released": "2013-09-17",
            "background_image": "https://media.rawg.io/media/games/gta5.jpg",
            "platforms": [
                {"platform": {"id": 4, "slug": "pc", "name": "PC"}, "released_at": null}
            ]
        }"#;
        let detail: CatalogGameDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 3498);
        assert_eq!(
            detail.plain_description(),
            "Rockstar's open world. Three protagonists."
        );
        assert_eq!(detail.display_release_date().as_deref(), Some("17/09/2013"));
    }

    #[test]
    fn display_date_absent_when_unreleased() {
        let detail = CatalogGameDetail {
            id: 1,
            slug: "x".into(),
            name: "X".into(),
            description: String::new(),
            metacritic: None,
            released: None,
            background_image: None,
            platforms: Vec::new(),
        };
        assert!(detail.display_release_date().is_none());
    }

    #[test]
    fn display_date_rejects_malformed_strings() {
        let mut detail = CatalogGameDetail {
            id: 1,
            slug: "x".into(),
            name: "X".into(),
            description: String::new(),
            metacritic: None,
            released: Some("2013-09-17-beta".into()),
            background_image: None,
            platforms: Vec::new(),
        };
        assert!(detail.display_release_date().is_none());

        for bad in ["TBA", "2013", "2013-09", "13-09-17", "2013-9-17", "YYYY-MM-DD"] {
            detail.released = Some(bad.into());
            assert!(detail.display_release_date().is_none(), "{bad}");
        }

        detail.released = Some("2013-09-17".into());
        assert_eq!(detail.display_release_date().as_deref(), Some("17/09/2013"));
    }

    #[test]
    fn truncated_payload_fails_to_decode() {
        let err = serde_json::from_str::<GamesPage>(r#"{"count": 1"#);
        assert!(err.is_err());
    }
}
