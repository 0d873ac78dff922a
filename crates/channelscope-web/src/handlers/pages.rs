//! HTML page handlers

use crate::{
    handlers::params::DetailParams,
    render::{
        document_end, document_start, hide_loading_placeholder, render_document,
        render_loading_placeholder, render_not_found, render_view,
    },
    state::AppState,
    view::{ChannelDetailView, ViewState},
};
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use channelscope_core::ChannelId;
use futures::stream::{self, StreamExt};
use std::{convert::Infallible, sync::Arc};
use tracing::debug;

/// Channel detail page
///
/// The document head and loading placeholder are flushed immediately; the settled
/// view follows on the same response once every request finished.
pub async fn channel_page(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Response {
    let query = match params.resolve(state.default_query()) {
        Ok(query) => query,
        Err(rejection) => return rejection.into_response(),
    };

    let Ok(channel_id) = raw_id.parse::<ChannelId>() else {
        debug!(raw_id, "Channel id is not numeric");
        let page = render_document("Channel", &ViewState::NotFound);
        return (StatusCode::NOT_FOUND, Html(page)).into_response();
    };

    let view = ChannelDetailView::spawn(Arc::clone(&state.api), channel_id, query);
    let head = format!(
        "{}{}",
        document_start(&format!("Channel {channel_id}")),
        render_loading_placeholder()
    );

    let body = stream::once(async move { Ok::<_, Infallible>(head) }).chain(stream::once(
        async move {
            let settled = view.settled().await;
            Ok(format!(
                "{}{}{}",
                hide_loading_placeholder(),
                render_view(&settled),
                document_end()
            ))
        },
    ));

    Html(Body::from_stream(body)).into_response()
}

/// Fallback for unknown routes
pub async fn not_found_page(uri: Uri) -> (StatusCode, Html<String>) {
    debug!(path = uri.path(), "No route matched");
    let page = format!(
        "{}{}{}",
        document_start("Page Not Found"),
        render_not_found(uri.path()),
        document_end()
    );
    (StatusCode::NOT_FOUND, Html(page))
}
