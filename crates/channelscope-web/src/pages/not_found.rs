//! Fallback page for unknown routes

use leptos::prelude::*;

/// Page shown for any path outside the channel routes
#[component]
pub fn NotFound(
    /// Requested path
    #[prop(into)]
    path: String,
) -> impl IntoView {
    view! {
        <div class="not-found p-8">
            <h2 class="text-2xl font-bold">"Page Not Found"</h2>
            <p class="text-muted-foreground">"Nothing is served at " <code>{path}</code> "."</p>
            <p class="text-sm">"Channel pages live under " <code>"/channels/{id}"</code> "."</p>
        </div>
    }
}
