//! Channel detail view state and its load cycle
//!
//! A view starts in [`ViewState::Loading`], fetches channel metadata, videos and
//! analytics concurrently, and settles in [`ViewState::Found`] or
//! [`ViewState::NotFound`]. Any failed request collapses the whole batch into
//! `NotFound`.

use crate::api_client::AnalyticsApi;
use channelscope_core::{Channel, ChannelAnalytics, ChannelId, Video, VideoQuery};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Everything the detail page renders once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetail {
    /// Channel metadata
    pub channel: Channel,
    /// Videos in the requested order
    pub videos: Vec<Video>,
    /// Aggregate analytics, absent when the API had none
    pub analytics: Option<ChannelAnalytics>,
}

/// State of the channel detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState {
    /// Requests are in flight
    Loading,
    /// A request failed or the channel does not exist
    NotFound,
    /// All requests succeeded
    Found(Box<ChannelDetail>),
}

impl ViewState {
    /// Whether requests are still in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded detail, if any
    #[must_use]
    pub fn detail(&self) -> Option<&ChannelDetail> {
        match self {
            Self::Found(detail) => Some(detail.as_ref()),
            Self::Loading | Self::NotFound => None,
        }
    }
}

/// Fetch the three resources of a channel concurrently and settle the view state
///
/// Never returns [`ViewState::Loading`].
pub async fn load_channel_detail(
    api: &dyn AnalyticsApi,
    channel_id: ChannelId,
    query: VideoQuery,
) -> ViewState {
    let fetched = tokio::try_join!(
        api.get_channel(channel_id),
        api.get_channel_videos(channel_id, query),
        api.get_channel_analytics(channel_id),
    );

    match fetched {
        Ok((Some(channel), videos, analytics)) => {
            info!(
                channel_id,
                videos = videos.len(),
                has_analytics = analytics.is_some(),
                "Loaded channel detail"
            );
            ViewState::Found(Box::new(ChannelDetail {
                channel,
                videos,
                analytics,
            }))
        }
        Ok((None, _, _)) => {
            warn!(channel_id, "Channel payload was empty");
            ViewState::NotFound
        }
        Err(e) => {
            error!(channel_id, error = %e, "Error fetching channel data");
            ViewState::NotFound
        }
    }
}

/// A mounted channel detail view
///
/// Loads run on detached tasks: dropping the view does not cancel requests in
/// flight, their results are simply never observed.
#[derive(Debug)]
pub struct ChannelDetailView {
    api: Arc<dyn AnalyticsApi>,
    channel_id: ChannelId,
    query: VideoQuery,
    generation: Arc<AtomicU64>,
    state_tx: Arc<watch::Sender<ViewState>>,
    state_rx: watch::Receiver<ViewState>,
}

impl ChannelDetailView {
    /// Mount the view for `channel_id` and start loading
    ///
    /// Must be called within a Tokio runtime.
    #[must_use]
    pub fn spawn(api: Arc<dyn AnalyticsApi>, channel_id: ChannelId, query: VideoQuery) -> Self {
        let (state_tx, state_rx) = watch::channel(ViewState::Loading);
        let view = Self {
            api,
            channel_id,
            query,
            generation: Arc::new(AtomicU64::new(0)),
            state_tx: Arc::new(state_tx),
            state_rx,
        };
        view.start_load();
        view
    }

    /// Channel currently shown
    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state_rx.borrow().clone()
    }

    /// Wait until the current load settles
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state_rx.clone();
        let settled = rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());

        // The sender lives as long as `self`, so waiting cannot fail
        settled.unwrap_or_else(|_| self.state())
    }

    /// Show another channel, reloading when the identifier changed
    pub fn navigate(&mut self, channel_id: ChannelId) {
        if channel_id == self.channel_id {
            return;
        }
        self.channel_id = channel_id;
        self.start_load();
    }

    fn start_load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(ViewState::Loading);

        let api = Arc::clone(&self.api);
        let latest = Arc::clone(&self.generation);
        let state_tx = Arc::clone(&self.state_tx);
        let channel_id = self.channel_id;
        let query = self.query;

        tokio::spawn(async move {
            let state = load_channel_detail(api.as_ref(), channel_id, query).await;

            state_tx.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) == generation {
                    *current = state;
                    true
                } else {
                    info!(channel_id, "Discarding result of superseded load");
                    false
                }
            });
        });
    }
}
