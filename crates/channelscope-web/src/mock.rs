//! In-memory analytics API for tests and offline rendering

use crate::api_client::AnalyticsApi;
use async_trait::async_trait;
use channelscope_core::{Channel, ChannelAnalytics, ChannelId, Error, Result, Video, VideoQuery};
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{sleep, Duration};

/// Endpoint of the analytics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Channel metadata
    Channel,
    /// Channel videos
    Videos,
    /// Channel analytics
    Analytics,
}

/// A call received by [`MockAnalyticsApi`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    /// `get_channel`
    Channel(ChannelId),
    /// `get_channel_videos`
    Videos(ChannelId, VideoQuery),
    /// `get_channel_analytics`
    Analytics(ChannelId),
}

impl ApiCall {
    /// Channel the call was made for
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        match *self {
            Self::Channel(id) | Self::Videos(id, _) | Self::Analytics(id) => id,
        }
    }
}

/// Mock analytics API serving fixed data
#[derive(Debug, Default)]
pub struct MockAnalyticsApi {
    channels: HashMap<ChannelId, Channel>,
    videos: Vec<Video>,
    analytics: Option<ChannelAnalytics>,
    failing: Option<Endpoint>,
    delay_ms: u64,
    channel_delays_ms: HashMap<ChannelId, u64>,
    gate: Option<watch::Receiver<bool>>,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl MockAnalyticsApi {
    /// Create an empty mock: every channel is unknown
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock serving the sample channel, its videos and analytics
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new()
            .with_channel(sample_channel())
            .with_videos(sample_videos())
            .with_analytics(sample_analytics())
    }

    /// Serve `channel` under its own id
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.insert(channel.id, channel);
        self
    }

    /// Videos returned for every channel
    #[must_use]
    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    /// Analytics returned for every channel
    #[must_use]
    pub fn with_analytics(mut self, analytics: ChannelAnalytics) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// Answer analytics requests with `null`
    #[must_use]
    pub fn without_analytics(mut self) -> Self {
        self.analytics = None;
        self
    }

    /// Make one endpoint fail with a 500
    #[must_use]
    pub const fn with_failure(mut self, endpoint: Endpoint) -> Self {
        self.failing = Some(endpoint);
        self
    }

    /// Delay every response
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay only the requests for `channel_id`, on top of [`Self::with_delay`]
    #[must_use]
    pub fn with_channel_delay(mut self, channel_id: ChannelId, delay_ms: u64) -> Self {
        self.channel_delays_ms.insert(channel_id, delay_ms);
        self
    }

    /// Hold every request until the returned sender publishes `true`
    #[must_use]
    pub fn gated(mut self) -> (Self, watch::Sender<bool>) {
        let (tx, rx) = watch::channel(false);
        self.gate = Some(rx);
        (self, tx)
    }

    /// Calls received so far, in arrival order
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    /// Shared handle to the call log, usable after the mock moved into an `Arc<dyn AnalyticsApi>`
    #[must_use]
    pub fn call_log(&self) -> Arc<Mutex<Vec<ApiCall>>> {
        Arc::clone(&self.calls)
    }

    async fn respond(&self, call: ApiCall, endpoint: Endpoint) -> Result<()> {
        self.calls.lock().push(call);

        if let Some(mut gate) = self.gate.clone() {
            // A dropped sender releases the gate as well
            let _ = gate.wait_for(|open| *open).await;
        }
        let delay_ms = self.delay_ms
            + self
                .channel_delays_ms
                .get(&call.channel_id())
                .copied()
                .unwrap_or_default();
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }

        if self.failing == Some(endpoint) {
            return Err(Error::Api {
                status: 500,
                message: format!("mock failure for {endpoint:?}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsApi for MockAnalyticsApi {
    async fn get_channel(&self, channel_id: ChannelId) -> Result<Option<Channel>> {
        self.respond(ApiCall::Channel(channel_id), Endpoint::Channel)
            .await?;
        Ok(self.channels.get(&channel_id).cloned())
    }

    async fn get_channel_videos(&self, channel_id: ChannelId, query: VideoQuery) -> Result<Vec<Video>> {
        self.respond(ApiCall::Videos(channel_id, query), Endpoint::Videos)
            .await?;
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
        Ok(self.videos.iter().take(limit).cloned().collect())
    }

    async fn get_channel_analytics(&self, channel_id: ChannelId) -> Result<Option<ChannelAnalytics>> {
        self.respond(ApiCall::Analytics(channel_id), Endpoint::Analytics)
            .await?;
        Ok(self.analytics.clone())
    }
}

/// Sample channel with every optional field present
#[must_use]
pub fn sample_channel() -> Channel {
    Channel {
        id: 42,
        title: "Rust Systems Weekly".to_string(),
        custom_url: Some("@rustsystems".to_string()),
        thumbnail_url: Some("https://img.example.com/rustsystems.jpg".to_string()),
        description: Some("Deep dives into async runtimes, allocators and compilers.".to_string()),
    }
}

/// Sample videos, the second one without computed rates
#[must_use]
pub fn sample_videos() -> Vec<Video> {
    vec![
        Video {
            id: "vid-001".to_string(),
            title: "Writing an async runtime".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 25, 30).single().unwrap_or_default(),
            view_count: 1_234_567,
            like_count: 45_210,
            comment_count: 3_120,
            engagement_rate: Some(0.0392),
            views_per_day: Some(5_120.6),
        },
        Video {
            id: "vid-002".to_string(),
            title: "Allocator internals".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).single().unwrap_or_default(),
            view_count: 98_000,
            like_count: 2_400,
            comment_count: 310,
            engagement_rate: None,
            views_per_day: None,
        },
    ]
}

/// Sample aggregate analytics
#[must_use]
pub const fn sample_analytics() -> ChannelAnalytics {
    ChannelAnalytics {
        avg_views_per_video: 666_283.5,
        avg_engagement_rate: 0.1234,
        total_likes: 47_610,
        total_comments: 3_430,
    }
}
