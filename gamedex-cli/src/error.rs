/// Errors surfaced to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no API key: pass --key, set RAWG_API_KEY, or add api_key to {0}")]
    MissingApiKey(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Api(#[from] gamedex_api::ApiError),

    #[error(transparent)]
    Store(#[from] gamedex_db::StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
