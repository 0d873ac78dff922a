//! Channel header: avatar, title, handle and description

use channelscope_core::Channel;
use leptos::prelude::*;

/// Header block of the channel detail page
///
/// The avatar and the description are omitted when the API left them empty.
#[component]
pub fn ChannelHeader(
    /// Channel to describe
    channel: Channel,
) -> impl IntoView {
    let Channel {
        title,
        custom_url,
        thumbnail_url,
        description,
        ..
    } = channel;

    let avatar = thumbnail_url.filter(|url| !url.is_empty()).map(|src| {
        let alt = title.clone();
        view! { <img src=src alt=alt class="h-20 w-20 rounded-full" /> }
    });

    let description = description
        .filter(|text| !text.is_empty())
        .map(|text| {
            view! { <p class="channel-description text-sm text-muted-foreground line-clamp-2">{text}</p> }
        });

    let handle = custom_url.unwrap_or_default();

    view! {
        <div class="channel-header mb-8">
            <div class="flex items-center gap-4 mb-4">
                {avatar}
                <div>
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="channel-handle text-muted-foreground">{handle}</p>
                </div>
            </div>
            {description}
        </div>
    }
}
