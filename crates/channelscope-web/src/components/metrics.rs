//! Aggregate metric cards

use channelscope_core::{
    utils::{format_number, format_percent, format_rounded},
    ChannelAnalytics,
};
use leptos::prelude::*;

/// Single metric card
#[component]
pub fn MetricCard(
    /// Card caption
    #[prop(into)]
    title: String,
    /// Formatted value
    value: String,
) -> impl IntoView {
    view! {
        <div class="card metric-card">
            <div class="card-header">
                <h3 class="card-title text-sm font-medium">{title}</h3>
            </div>
            <div class="card-content">
                <div class="metric-value text-2xl font-bold">{value}</div>
            </div>
        </div>
    }
}

/// Four-card summary of the channel's aggregate analytics
#[component]
pub fn MetricsSummary(
    /// Analytics computed by the API
    analytics: ChannelAnalytics,
) -> impl IntoView {
    let avg_views = format_rounded(analytics.avg_views_per_video);
    let avg_engagement = format_percent(analytics.avg_engagement_rate);
    let total_likes = format_number(analytics.total_likes);
    let total_comments = format_number(analytics.total_comments);

    view! {
        <div class="metrics-summary grid gap-4 md:grid-cols-4 mb-8">
            <MetricCard title="Avg Views/Video" value=avg_views />
            <MetricCard title="Avg Engagement" value=avg_engagement />
            <MetricCard title="Total Likes" value=total_likes />
            <MetricCard title="Total Comments" value=total_comments />
        </div>
    }
}
