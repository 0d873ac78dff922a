//! JSON handlers

use crate::{handlers::params::DetailParams, state::AppState, view::{load_channel_detail, ViewState}};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use channelscope_core::ChannelId;
use std::sync::Arc;

/// Settled channel detail view as JSON
///
/// Answers `404` with `{"status":"not_found"}` when the view settles on not found
/// or the id is not numeric.
pub async fn channel_detail(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<(StatusCode, Json<ViewState>), (StatusCode, String)> {
    let query = params.resolve(state.default_query())?;
    let Ok(channel_id) = raw_id.parse::<ChannelId>() else {
        return Ok((StatusCode::NOT_FOUND, Json(ViewState::NotFound)));
    };
    let view = load_channel_detail(state.api.as_ref(), channel_id, query).await;

    let status = match view {
        ViewState::Found(_) => StatusCode::OK,
        ViewState::Loading | ViewState::NotFound => StatusCode::NOT_FOUND,
    };
    Ok((status, Json(view)))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
