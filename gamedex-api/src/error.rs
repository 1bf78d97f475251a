/// Errors from catalog API calls. Transport, status, and decode failures all
/// collapse to "no result decoded"; only connectivity is distinguishable,
/// via [`ApiError::is_connectivity`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the failure looks like "offline" rather than a bad payload.
    /// The search screen picks between a retry prompt and an empty state
    /// based on this.
    pub fn is_connectivity(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
