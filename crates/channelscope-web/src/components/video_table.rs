//! Videos table with formatted counts, rates and dates

use channelscope_core::{
    utils::{display_or_na, format_date, format_number, format_percent, format_rounded},
    Video,
};
use leptos::prelude::*;

/// Table of the channel's videos
#[component]
pub fn VideoTable(
    /// Videos in display order
    videos: Vec<Video>,
) -> impl IntoView {
    let rows = videos
        .into_iter()
        .map(|video| view! { <VideoRow video /> })
        .collect_view();

    view! {
        <div class="card videos-card">
            <div class="card-header">
                <h2 class="card-title">"Videos"</h2>
            </div>
            <div class="card-content">
                <table class="table videos-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Published"</th>
                            <th class="text-right">"Views"</th>
                            <th class="text-right">"Likes"</th>
                            <th class="text-right">"Comments"</th>
                            <th class="text-right">"Engagement"</th>
                            <th class="text-right">"Views/Day"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}

/// Individual video row
#[component]
fn VideoRow(video: Video) -> impl IntoView {
    let Video {
        id,
        title,
        published_at,
        view_count,
        like_count,
        comment_count,
        engagement_rate,
        views_per_day,
    } = video;

    let published = format_date(&published_at);
    let views = format_number(view_count);
    let likes = format_number(like_count);
    let comments = format_number(comment_count);
    let engagement = display_or_na(engagement_rate, format_percent);
    let per_day = display_or_na(views_per_day, format_rounded);

    view! {
        <tr data-video-id=id>
            <td class="font-medium max-w-md truncate">{title}</td>
            <td>{published}</td>
            <td class="text-right">{views}</td>
            <td class="text-right">{likes}</td>
            <td class="text-right">{comments}</td>
            <td class="text-right engagement">{engagement}</td>
            <td class="text-right views-per-day">{per_day}</td>
        </tr>
    }
}
