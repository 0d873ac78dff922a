//! HTTP client for the channel analytics API

use async_trait::async_trait;
use channelscope_core::{
    config::ApiConfig, Channel, ChannelAnalytics, ChannelId, Error, Result, Video, VideoQuery,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::{fmt, time::Duration};
use tracing::debug;

/// Read-only access to pre-computed channel analytics
///
/// The channel detail view only depends on this trait, so tests can swap in
/// [`crate::mock::MockAnalyticsApi`].
#[async_trait]
pub trait AnalyticsApi: fmt::Debug + Send + Sync {
    /// Fetch channel metadata; `Ok(None)` when the API answers with `null`
    async fn get_channel(&self, channel_id: ChannelId) -> Result<Option<Channel>>;

    /// Fetch a page of the channel's videos
    async fn get_channel_videos(&self, channel_id: ChannelId, query: VideoQuery) -> Result<Vec<Video>>;

    /// Fetch aggregate analytics; `Ok(None)` when the API answers with `null`
    async fn get_channel_analytics(&self, channel_id: ChannelId) -> Result<Option<ChannelAnalytics>>;
}

/// API client for making HTTP requests to the analytics API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Create a new API client with default transport settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
            api_key: None,
            timeout: None,
        }
    }

    /// Create a client from the `[api]` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(config.base_url.clone()),
            api_key: config.api_key.clone(),
            timeout: Some(timeout),
        })
    }

    /// Set the API key for authentication
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Base URL requests are issued against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, resource, "Requesting analytics resource");

        let mut request = self.client.get(&url);

        if let Some(ref api_key) = self.api_key {
            request = request.header("X-API-Key", api_key);
        }

        let response = request.send().await.map_err(|e| self.transport_error(&e, resource))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: format!("{resource} request to {path} failed"),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e, resource))?;

        serde_json::from_slice(&body).map_err(|e| Error::Decode(format!("{resource}: {e}")))
    }

    fn transport_error(&self, error: &reqwest::Error, resource: &str) -> Error {
        match self.timeout {
            Some(timeout) if error.is_timeout() => Error::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
            _ => Error::Http(format!("Failed to fetch {resource}: {error}")),
        }
    }
}

#[async_trait]
impl AnalyticsApi for ApiClient {
    async fn get_channel(&self, channel_id: ChannelId) -> Result<Option<Channel>> {
        self.get_json(&format!("/api/channels/{channel_id}"), "channel")
            .await
    }

    async fn get_channel_videos(&self, channel_id: ChannelId, query: VideoQuery) -> Result<Vec<Video>> {
        let query_string = query.to_query_string()?;
        self.get_json(
            &format!("/api/channels/{channel_id}/videos?{query_string}"),
            "channel videos",
        )
        .await
    }

    async fn get_channel_analytics(&self, channel_id: ChannelId) -> Result<Option<ChannelAnalytics>> {
        self.get_json(&format!("/api/channels/{channel_id}/analytics"), "channel analytics")
            .await
    }
}

fn normalize_base_url(base_url: String) -> String {
    match base_url.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => base_url,
    }
}
