//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use channelscope_core::{Config, Result};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the analytics API client cannot be built.
pub fn build_app(config: Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config)?);
    Ok(build_app_with_state(state))
}

/// Build the application over prepared state
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    build_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
