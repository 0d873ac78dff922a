//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use channelscope_core::Config;
use channelscope_web::{mock::MockAnalyticsApi, AnalyticsApi, AppState};
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Application state over the given API with default configuration
pub fn state_with(api: impl AnalyticsApi + 'static) -> Arc<AppState> {
    Arc::new(AppState::with_api(Config::default(), Arc::new(api)))
}

/// Application state over the sample mock data
pub fn sample_state() -> Arc<AppState> {
    state_with(MockAnalyticsApi::with_sample_data())
}

/// Configuration pointing the API client at `base_url`
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config
}

/// Channel payload as served by the analytics API
pub fn channel_json() -> Value {
    json!({
        "id": 42,
        "title": "Rust Systems Weekly",
        "custom_url": "@rustsystems",
        "thumbnail_url": "https://img.example.com/rustsystems.jpg",
        "description": "Deep dives into async runtimes, allocators and compilers.",
        "subscriber_count": 120000
    })
}

/// Videos payload as served by the analytics API
pub fn videos_json() -> Value {
    json!([
        {
            "id": "vid-001",
            "title": "Writing an async runtime",
            "published_at": "2024-03-15T14:25:30Z",
            "view_count": 1234567,
            "like_count": 45210,
            "comment_count": 3120,
            "engagement_rate": 0.0392,
            "views_per_day": 5120.6
        },
        {
            "id": "vid-002",
            "title": "Allocator internals",
            "published_at": "2024-01-02T09:00:00Z",
            "view_count": 98000,
            "like_count": 2400,
            "comment_count": 310,
            "engagement_rate": null,
            "views_per_day": null
        }
    ])
}

/// Analytics payload as served by the analytics API
pub fn analytics_json() -> Value {
    json!({
        "avg_views_per_video": 666283.5,
        "avg_engagement_rate": 0.1234,
        "total_likes": 47610,
        "total_comments": 3430
    })
}

/// Start a mock analytics API serving channel 42
pub async fn start_analytics_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(channel_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/channels/42/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/channels/42/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analytics_json()))
        .mount(&server)
        .await;

    server
}
