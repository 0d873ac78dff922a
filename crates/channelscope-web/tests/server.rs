//! Integration tests for the HTTP surface

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use channelscope_web::{build_app, build_app_with_state, mock::MockAnalyticsApi, mock::Endpoint};
use common::*;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_channel_page_renders_settled_view() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, html) = get(app, "/channels/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Channel 42</title>"));
    assert!(html.contains("Rust Systems Weekly"));
    assert!(html.contains("12.34%"));
    assert!(html.contains("Writing an async runtime"));
    assert!(html.ends_with("</body></html>"));

    // Loading placeholder comes first and is hidden before the content
    let loading = html.find("Loading channel...").unwrap();
    let hidden = html.find("#channel-loading{display:none}").unwrap();
    let content = html.find("Rust Systems Weekly").unwrap();
    assert!(loading < hidden && hidden < content);
}

#[tokio::test]
async fn test_channel_page_content_type() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let response = app
        .oneshot(Request::builder().uri("/channels/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_channel_page_streams_loading_first() {
    init_test_logging();
    let (api, release) = MockAnalyticsApi::with_sample_data().gated();
    let app = build_app_with_state(state_with(api));

    let response = app
        .oneshot(Request::builder().uri("/channels/42").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let mut chunks = response.into_body().into_data_stream();

    let first = chunks.next().await.unwrap().unwrap();
    let first = String::from_utf8(first.to_vec()).unwrap();
    assert!(first.contains("Loading channel..."));
    assert!(!first.contains("Rust Systems Weekly"));
    assert!(!first.contains("metric-card"));

    release.send_replace(true);

    let mut rest = String::new();
    while let Some(chunk) = chunks.next().await {
        rest.push_str(&String::from_utf8(chunk.unwrap().to_vec()).unwrap());
    }
    assert!(rest.contains("Rust Systems Weekly"));
    assert!(!rest.contains("Loading channel..."));
}

#[tokio::test]
async fn test_channel_page_not_found_on_failure() {
    init_test_logging();
    let app = build_app_with_state(state_with(
        MockAnalyticsApi::with_sample_data().with_failure(Endpoint::Analytics),
    ));

    let (status, html) = get(app, "/channels/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Channel not found"));
    assert!(!html.contains("metric-card"));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn test_channel_page_non_numeric_id() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, html) = get(app, "/channels/not-a-number").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Channel not found"));
}

#[tokio::test]
async fn test_channel_page_rejects_bad_limit() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, body) = get(app, "/channels/42?limit=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("limit"));
}

#[tokio::test]
async fn test_channel_page_rejects_unknown_sort() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, _) = get(app, "/channels/42?sort_by=dislikes").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_detail_json_found() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, body) = get(app, "/api/channels/42/detail").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "found");
    assert_eq!(json["channel"]["id"], 42);
    assert_eq!(json["videos"].as_array().unwrap().len(), 2);
    assert_eq!(json["analytics"]["total_comments"], 3430);
}

#[tokio::test]
async fn test_detail_json_honours_limit_override() {
    init_test_logging();
    let api = MockAnalyticsApi::with_sample_data();
    let log = api.call_log();
    let app = build_app_with_state(state_with(api));

    let (status, body) = get(app, "/api/channels/42/detail?limit=1&sort_by=like_count").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["videos"].as_array().unwrap().len(), 1);
    assert!(log.lock().iter().any(|call| matches!(
        call,
        channelscope_web::mock::ApiCall::Videos(42, query)
            if query.limit == 1 && query.sort_by == channelscope_core::VideoSort::LikeCount
    )));
}

#[tokio::test]
async fn test_detail_json_not_found() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, body) = get(app, "/api/channels/7/detail").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"status":"not_found"}"#);
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    init_test_logging();
    let app = build_app_with_state(sample_state());

    let (status, html) = get(app, "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("/no/such/page"));
}

#[tokio::test]
async fn test_server_against_http_api() {
    init_test_logging();
    let analytics = start_analytics_api().await;
    let app = build_app(config_for(&analytics.uri())).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_handle = tokio::spawn(async move { axum::serve(listener, app).await });

    let response = reqwest::get(format!("http://{addr}/channels/42")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("Rust Systems Weekly"));
    assert!(html.contains("1,234,567"));
    assert!(html.contains("N/A"));

    server_handle.abort();
}
