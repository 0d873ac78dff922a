//! Application state management

use crate::api_client::{AnalyticsApi, ApiClient};
use channelscope_core::{Config, Result, VideoQuery};
use std::sync::Arc;

/// Application state holding configuration and the analytics API
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Analytics API the views read from
    pub api: Arc<dyn AnalyticsApi>,
}

impl AppState {
    /// Create application state backed by the configured HTTP API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::from_config(&config.api)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create application state over any analytics API
    #[must_use]
    pub fn with_api(config: Config, api: Arc<dyn AnalyticsApi>) -> Self {
        Self { config, api }
    }

    /// Video query used when a request carries no overrides
    #[must_use]
    pub const fn default_query(&self) -> VideoQuery {
        self.config.dashboard.video_query()
    }
}
