//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/channels/:id", get(pages::channel_page))
        // JSON routes
        .route("/api/channels/:id/detail", get(api::channel_detail))
        // Health check
        .route("/health", get(api::health_check))
        .fallback(pages::not_found_page)
}
