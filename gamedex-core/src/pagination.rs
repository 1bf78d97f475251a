//! Per-category paging and accumulation state machines.
//!
//! Each pager tracks a 1-based page counter and an append-only result list.
//! Counters move only on success, so a failed "load more" retries the same
//! page instead of silently skipping it.

use gamedex_api::{ApiError, CatalogClient, CatalogGame, Category, GamesPage};

/// Paging state for one catalog category.
#[derive(Debug)]
pub struct CategoryPager {
    category: Category,
    page: u32,
    games: Vec<CatalogGame>,
    loaded: bool,
}

impl CategoryPager {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            page: 1,
            games: Vec::new(),
            loaded: false,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn games(&self) -> &[CatalogGame] {
        &self.games
    }

    /// True once at least one page has decoded successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch page 1. Success replaces the accumulated list; failure leaves
    /// all state untouched.
    pub async fn load_initial(&mut self, client: &CatalogClient) -> Result<usize, ApiError> {
        let page = client.games(self.category, 1).await?;
        Ok(self.apply_initial(page))
    }

    /// Fetch the page after the current one and append its results. The
    /// counter only advances on success, so a retry refetches the same page.
    pub async fn load_more(&mut self, client: &CatalogClient) -> Result<usize, ApiError> {
        let result = client.games(self.category, self.page + 1).await;
        self.finish_load_more(result)
    }

    /// Back to the unloaded page-1 state. Only an explicit full reload goes
    /// through here; counters never otherwise decrease.
    pub fn reset(&mut self) {
        self.page = 1;
        self.games.clear();
        self.loaded = false;
    }

    pub(crate) fn apply_initial(&mut self, page: GamesPage) -> usize {
        self.page = 1;
        self.games = page.results;
        self.loaded = true;
        self.games.len()
    }

    pub(crate) fn finish_load_more(
        &mut self,
        result: Result<GamesPage, ApiError>,
    ) -> Result<usize, ApiError> {
        let page = result?;
        Ok(self.apply_more(page))
    }

    pub(crate) fn apply_more(&mut self, page: GamesPage) -> usize {
        self.page += 1;
        let appended = page.results.len();
        self.games.extend(page.results);
        appended
    }
}

/// The six category pagers behind the home screen, loaded together.
#[derive(Debug)]
pub struct HomeFeeds {
    pagers: Vec<CategoryPager>,
}

impl Default for HomeFeeds {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeFeeds {
    pub fn new() -> Self {
        Self {
            pagers: Category::ALL.iter().copied().map(CategoryPager::new).collect(),
        }
    }

    pub fn pager(&self, category: Category) -> &CategoryPager {
        &self.pagers[Self::index(category)]
    }

    pub fn pager_mut(&mut self, category: Category) -> &mut CategoryPager {
        &mut self.pagers[Self::index(category)]
    }

    pub fn pagers(&self) -> &[CategoryPager] {
        &self.pagers
    }

    /// True only once every category has loaded at least one page.
    pub fn ready(&self) -> bool {
        self.pagers.iter().all(CategoryPager::is_loaded)
    }

    /// Fetch page 1 of every category concurrently, then apply the results
    /// on the calling task. Pages that succeeded are applied even when
    /// another category failed; the first failure is returned once all six
    /// requests have completed.
    pub async fn load_all(&mut self, client: &CatalogClient) -> Result<(), ApiError> {
        let fetches = Category::ALL.map(|category| client.games(category, 1));
        let results = futures::future::join_all(fetches).await;

        let mut first_err = None;
        for (pager, result) in self.pagers.iter_mut().zip(results) {
            match result {
                Ok(page) => {
                    pager.apply_initial(page);
                }
                Err(e) => {
                    log::warn!("{} feed failed: {e}", pager.category().label());
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Explicit full reload: every counter back to page 1, lists cleared,
    /// then a fresh [`HomeFeeds::load_all`].
    pub async fn reload_all(&mut self, client: &CatalogClient) -> Result<(), ApiError> {
        for pager in &mut self.pagers {
            pager.reset();
        }
        self.load_all(client).await
    }

    pub async fn load_more(
        &mut self,
        category: Category,
        client: &CatalogClient,
    ) -> Result<usize, ApiError> {
        self.pager_mut(category).load_more(client).await
    }

    fn index(category: Category) -> usize {
        match category {
            Category::TopRated => 0,
            Category::RecentReleases => 1,
            Category::Pc => 2,
            Category::Playstation => 3,
            Category::Xbox => 4,
            Category::Nintendo => 5,
        }
    }
}

/// How a search request resolved, classified the way the search screen
/// renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A page decoded; this many results were added.
    Results(usize),
    /// The catalog answered but matched nothing ("No games found").
    NoMatches,
    /// Transport-level failure ("Could not connect to server").
    Offline,
}

/// Search paging with an in-flight guard and a scroll-midpoint trigger for
/// append mode.
#[derive(Debug)]
pub struct SearchPager {
    query: String,
    page: u32,
    results: Vec<CatalogGame>,
    loading: bool,
    loaded: bool,
}

impl Default for SearchPager {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPager {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            loading: false,
            loaded: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[CatalogGame] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Append-mode trigger: load more once consumed content passes the
    /// midpoint of what is available, with at most one load in flight.
    pub fn should_load_more(&self, consumed: f64, available: f64) -> bool {
        self.loaded && !self.loading && available > 0.0 && consumed > available / 2.0
    }

    /// Run a fresh search: back to page 1, previous results replaced on any
    /// decoded response.
    pub async fn run(&mut self, client: &CatalogClient, query: &str) -> SearchOutcome {
        self.query = query.to_string();
        self.loading = true;
        let result = client.search(query, 1).await;
        self.loading = false;
        match result {
            Ok(page) => self.apply_run(page),
            Err(e) => {
                log::warn!("search '{query}' failed: {e}");
                if e.is_connectivity() {
                    SearchOutcome::Offline
                } else {
                    // An unknown query and a bad payload both render as an
                    // empty result set.
                    self.results.clear();
                    SearchOutcome::NoMatches
                }
            }
        }
    }

    /// Fetch the next page of the current query and append. The counter
    /// advances only on success; append-mode failures keep the accumulated
    /// results.
    pub async fn load_more(&mut self, client: &CatalogClient) -> SearchOutcome {
        if self.loading {
            return SearchOutcome::Results(0);
        }
        self.loading = true;
        let result = client.search(&self.query, self.page + 1).await;
        self.loading = false;
        match result {
            Ok(page) => self.apply_more(page),
            Err(e) => {
                log::warn!("search '{}' page {} failed: {e}", self.query, self.page + 1);
                if e.is_connectivity() {
                    SearchOutcome::Offline
                } else {
                    SearchOutcome::NoMatches
                }
            }
        }
    }

    pub(crate) fn apply_run(&mut self, page: GamesPage) -> SearchOutcome {
        self.page = 1;
        self.loaded = true;
        if page.results.is_empty() {
            self.results.clear();
            SearchOutcome::NoMatches
        } else {
            let added = page.results.len();
            self.results = page.results;
            SearchOutcome::Results(added)
        }
    }

    pub(crate) fn apply_more(&mut self, page: GamesPage) -> SearchOutcome {
        self.page += 1;
        let added = page.results.len();
        self.results.extend(page.results);
        SearchOutcome::Results(added)
    }
}
