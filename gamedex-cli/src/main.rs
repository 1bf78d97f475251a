//! gamedex CLI
//!
//! Terminal front end for the RAWG catalog core: browse the six curated
//! category feeds, search with load-more, show game detail, and manage the
//! locally persisted favorites collection.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;

use gamedex_api::{CatalogClient, CatalogGame, Category};
use gamedex_core::{CategoryPager, FavoriteGame, HomeFeeds, SearchOutcome, SearchPager};
use gamedex_db::{FavoritesStore, ToggleOutcome};

mod config;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Browse the RAWG game catalog and keep local favorites", long_about = None)]
struct Cli {
    /// RAWG API key (falls back to RAWG_API_KEY, then the config file)
    #[arg(short, long, global = true)]
    key: Option<String>,

    /// Favorites database path (defaults to the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load page 1 of all six category feeds
    Home,
    /// Browse one category feed
    Category {
        #[arg(value_enum)]
        category: CategoryArg,

        /// Number of pages to accumulate
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Search the catalog
    Search {
        query: String,

        /// Number of pages to accumulate
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Show a game's detail
    Detail { id: i64 },
    /// Manage the favorites collection
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// List favorites sorted by name
    List,
    /// Add or remove a favorite by catalog id
    Toggle { id: i64 },
    /// Remove a favorite by catalog id
    Remove { id: i64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Top,
    Recent,
    Pc,
    Playstation,
    Xbox,
    Nintendo,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Top => Category::TopRated,
            CategoryArg::Recent => Category::RecentReleases,
            CategoryArg::Pc => Category::Pc,
            CategoryArg::Playstation => Category::Playstation,
            CategoryArg::Xbox => Category::Xbox,
            CategoryArg::Nintendo => Category::Nintendo,
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = open_store(cli.db.clone())?;
    let client = CatalogClient::new(config::resolve_api_key(cli.key.clone())?)?;

    match cli.command {
        Commands::Home => home(&client, &store).await,
        Commands::Category { category, pages } => {
            browse_category(&client, &store, category.into(), pages).await
        }
        Commands::Search { query, pages } => search(&client, &store, &query, pages).await,
        Commands::Detail { id } => detail(&client, &store, id).await,
        Commands::Fav { command } => match command {
            FavCommands::List => fav_list(&store),
            FavCommands::Toggle { id } => fav_toggle(&client, &store, id).await,
            FavCommands::Remove { id } => fav_remove(&store, id),
        },
    }
}

fn open_store(db: Option<PathBuf>) -> Result<FavoritesStore, CliError> {
    let path = match db.or_else(config::default_db_path) {
        Some(path) => path,
        None => {
            return Err(CliError::Config(
                "could not determine a favorites database location; pass --db".to_string(),
            ));
        }
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(FavoritesStore::open(&path)?)
}

async fn home(client: &CatalogClient, store: &FavoritesStore) -> Result<(), CliError> {
    let mut feeds = HomeFeeds::new();
    let result = feeds.load_all(client).await;

    for pager in feeds.pagers() {
        if !pager.is_loaded() {
            continue;
        }
        println!("{}", pager.category().label().bold());
        for game in pager.games().iter().take(5) {
            print_game_line(game, store)?;
        }
        println!();
    }

    if let Err(e) = result {
        eprintln!("{} some feeds failed to load: {e}", "error:".red());
    }
    Ok(())
}

async fn browse_category(
    client: &CatalogClient,
    store: &FavoritesStore,
    category: Category,
    pages: u32,
) -> Result<(), CliError> {
    let mut pager = CategoryPager::new(category);
    pager.load_initial(client).await?;
    for _ in 1..pages {
        pager.load_more(client).await?;
    }

    println!(
        "{} (page {}, {} games)",
        category.label().bold(),
        pager.page(),
        pager.games().len()
    );
    for game in pager.games() {
        print_game_line(game, store)?;
    }
    Ok(())
}

async fn search(
    client: &CatalogClient,
    store: &FavoritesStore,
    query: &str,
    pages: u32,
) -> Result<(), CliError> {
    let mut pager = SearchPager::new();
    match pager.run(client, query).await {
        SearchOutcome::Offline => {
            println!("Could not connect to server.");
            return Ok(());
        }
        SearchOutcome::NoMatches => {
            println!("No games found.");
            return Ok(());
        }
        SearchOutcome::Results(_) => {}
    }
    for _ in 1..pages {
        match pager.load_more(client).await {
            SearchOutcome::Results(0) | SearchOutcome::NoMatches => break,
            SearchOutcome::Offline => {
                println!("Could not connect to server.");
                break;
            }
            SearchOutcome::Results(_) => {}
        }
    }

    println!(
        "{} results for '{}' (page {})",
        pager.results().len(),
        query.bold(),
        pager.page()
    );
    for game in pager.results() {
        print_game_line(game, store)?;
    }
    Ok(())
}

async fn detail(client: &CatalogClient, store: &FavoritesStore, id: i64) -> Result<(), CliError> {
    let detail = client.detail(id).await?;

    let marker = if store.exists(detail.id)? { " ♥" } else { "" };
    println!("{}{marker}", detail.name.bold());
    if let Some(date) = detail.display_release_date() {
        println!("Release date: {date}");
    }
    match detail.metacritic {
        Some(score) => println!("Metacritic: {score}"),
        None => println!("Metacritic: N/A"),
    }
    if !detail.platforms.is_empty() {
        let names: Vec<&str> = detail
            .platforms
            .iter()
            .map(|p| p.platform.name.as_str())
            .collect();
        println!("Platforms: {}", names.join(", "));
    }
    let description = detail.plain_description();
    if !description.is_empty() {
        println!("\n{description}");
    }
    Ok(())
}

fn fav_list(store: &FavoritesStore) -> Result<(), CliError> {
    let favorites = store.list_by_name()?;
    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for favorite in favorites {
        let platforms: Vec<&str> = favorite.platforms.iter().map(|p| p.name.as_str()).collect();
        println!(
            "{:>8}  {}  [{}]  {}",
            favorite.id,
            favorite.name.bold(),
            favorite.metacritic,
            platforms.join(", ").dimmed()
        );
    }
    Ok(())
}

async fn fav_toggle(
    client: &CatalogClient,
    store: &FavoritesStore,
    id: i64,
) -> Result<(), CliError> {
    let detail = client.detail(id).await?;

    // Capture image bytes when adding; a failed download is not fatal.
    let image = if store.exists(id)? {
        None
    } else {
        match &detail.background_image {
            Some(url) => match client.download_image(url).await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    log::warn!("image download for {id} failed: {e}");
                    None
                }
            },
            None => None,
        }
    };

    match store.toggle(FavoriteGame::from_detail(&detail, image))? {
        ToggleOutcome::Added => println!("Added to favorites."),
        ToggleOutcome::Removed => println!("Removed from favorites."),
    }
    Ok(())
}

fn fav_remove(store: &FavoritesStore, id: i64) -> Result<(), CliError> {
    if store.delete(id)? {
        println!("Removed from favorites.");
    } else {
        println!("Not a favorite.");
    }
    Ok(())
}

fn print_game_line(game: &CatalogGame, store: &FavoritesStore) -> Result<(), CliError> {
    // Favorite membership is always an id lookup against the store.
    let marker = if store.exists(game.id)? { "♥" } else { " " };
    let released = match (&game.released, game.tba) {
        (_, true) => "TBA".to_string(),
        (Some(date), _) => date.clone(),
        (None, _) => "—".to_string(),
    };
    let score = game
        .metacritic
        .map(|s| s.to_string())
        .unwrap_or_else(|| "--".to_string());
    println!(
        "{marker} {:>8}  {}  {}  {}",
        game.id,
        game.name.bold(),
        released.dimmed(),
        score
    );
    Ok(())
}
