//! Channel detail page

use crate::components::{ChannelHeader, Loading, MetricsSummary, StatusMessage, VideoTable, NOT_FOUND_MESSAGE};
use crate::view::{ChannelDetail, ViewState};
use leptos::prelude::*;

/// Channel detail page for any view state
#[component]
pub fn ChannelDetailPage(
    /// State to render
    state: ViewState,
) -> impl IntoView {
    match state {
        ViewState::Loading => view! { <Loading /> }.into_any(),
        ViewState::NotFound => view! { <StatusMessage message=NOT_FOUND_MESSAGE /> }.into_any(),
        ViewState::Found(detail) => {
            let ChannelDetail {
                channel,
                videos,
                analytics,
            } = *detail;

            let metrics = analytics.map(|analytics| view! { <MetricsSummary analytics /> });

            view! {
                <div class="channel-detail p-8">
                    <ChannelHeader channel />
                    {metrics}
                    <VideoTable videos />
                </div>
            }
            .into_any()
        }
    }
}
