//! Centered status messages for the loading and not-found states

use leptos::prelude::*;

/// Message shown while the channel data is in flight
pub const LOADING_MESSAGE: &str = "Loading channel...";

/// Message shown when the channel could not be loaded
pub const NOT_FOUND_MESSAGE: &str = "Channel not found";

/// Full-height centered status message
#[component]
pub fn StatusMessage(
    /// Text to display
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="status-message flex h-screen items-center justify-center">
            <p class="text-muted-foreground">{message}</p>
        </div>
    }
}

/// Loading placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! { <StatusMessage message=LOADING_MESSAGE /> }
}
