use reqwest::Url;

pub const BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// The six fixed curated catalog feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TopRated,
    RecentReleases,
    Pc,
    Playstation,
    Xbox,
    Nintendo,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TopRated,
        Category::RecentReleases,
        Category::Pc,
        Category::Playstation,
        Category::Xbox,
        Category::Nintendo,
    ];

    /// Query parameter selecting this feed upstream: an ordering for the
    /// score/recency feeds, a fixed platform-id set for the platform feeds.
    fn filter(self) -> (&'static str, &'static str) {
        match self {
            Category::TopRated => ("ordering", "-metacritic"),
            Category::RecentReleases => ("ordering", "-released"),
            Category::Pc => ("platforms", "4"),
            Category::Playstation => ("platforms", "187,18"),
            Category::Xbox => ("platforms", "1,186,14"),
            Category::Nintendo => ("platforms", "7,8,9,13"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::TopRated => "Top rated",
            Category::RecentReleases => "Recently released",
            Category::Pc => "PC",
            Category::Playstation => "PlayStation",
            Category::Xbox => "Xbox",
            Category::Nintendo => "Nintendo",
        }
    }
}

fn games_base() -> Url {
    // Static string, cannot fail to parse.
    Url::parse(&format!("{BASE_URL}/games")).expect("static catalog base URL is valid")
}

/// URL for one page of a category feed.
pub fn games_url(api_key: &str, category: Category, page: u32, page_size: u32) -> Url {
    let mut url = games_base();
    let (filter_key, filter_value) = category.filter();
    url.query_pairs_mut()
        .append_pair(filter_key, filter_value)
        .append_pair("page", &page.to_string())
        .append_pair("page_size", &page_size.to_string())
        .append_pair("key", api_key);
    url
}

/// URL for one page of free-text search. The query is percent-encoded by
/// the URL serializer.
pub fn search_url(api_key: &str, query: &str, page: u32, page_size: u32) -> Url {
    let mut url = games_base();
    url.query_pairs_mut()
        .append_pair("search", query)
        .append_pair("page", &page.to_string())
        .append_pair("page_size", &page_size.to_string())
        .append_pair("key", api_key);
    url
}

/// URL for a single game's detail. No paging.
pub fn detail_url(api_key: &str, id: i64) -> Url {
    let mut url = games_base();
    // Cannot fail: the path came from a parsed URL.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&id.to_string());
    }
    url.query_pairs_mut().append_pair("key", api_key);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-key";

    #[test]
    fn category_feed_urls_carry_the_fixed_filters() {
        let cases = [
            (Category::TopRated, "ordering=-metacritic"),
            (Category::RecentReleases, "ordering=-released"),
            (Category::Pc, "platforms=4"),
            (Category::Playstation, "platforms=187%2C18"),
            (Category::Xbox, "platforms=1%2C186%2C14"),
            (Category::Nintendo, "platforms=7%2C8%2C9%2C13"),
        ];
        for (category, expected) in cases {
            let url = games_url(KEY, category, 1, 15);
            assert!(url.as_str().starts_with("https://api.rawg.io/api/games?"));
            let query = url.query().unwrap();
            assert!(query.contains(expected), "{category:?}: {query}");
            assert!(query.contains("page=1"));
            assert!(query.contains("page_size=15"));
            assert!(query.contains("key=test-key"));
        }
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = search_url(KEY, "zelda breath of the wild", 2, 15);
        let query = url.query().unwrap();
        assert!(query.contains("search=zelda+breath+of+the+wild"));
        assert!(query.contains("page=2"));
    }

    #[test]
    fn detail_url_has_id_path_and_no_paging() {
        let url = detail_url(KEY, 3498);
        assert_eq!(url.path(), "/api/games/3498");
        let query = url.query().unwrap();
        assert!(query.contains("key=test-key"));
        assert!(!query.contains("page"));
    }

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 6);
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
