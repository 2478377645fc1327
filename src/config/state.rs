// Application state module
// Immutable per-process state shared across connections

use std::time::Duration;

use super::types::Config;

/// Application state
///
/// One instance lives behind an `Arc` for the whole process. The reqwest
/// client is shared so connections to the verification and email services
/// are pooled across requests.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Build shared state from a loaded configuration
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.order.request_timeout))
            .user_agent(config.http.server_name.clone())
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
