//! Application state shared across all request handlers.

use url::Url;

/// Shared resources for the proxy handlers.
///
/// Cloned for every request through Axum's state extraction; `reqwest::Client`
/// shares its connection pool between clones.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for requests to the bot API.
    ///
    /// Configured to never follow redirects.
    pub http_client: reqwest::Client,

    /// Base URL of the bot API, ending in `/`.
    pub bot_api_url: Url,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, bot_api_url: Url) -> Self {
        Self {
            http_client,
            bot_api_url,
        }
    }
}
