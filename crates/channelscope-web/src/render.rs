//! Server-side rendering of the channel detail page to HTML

use crate::components::Loading;
use crate::pages::{ChannelDetailPage, NotFound};
use crate::view::ViewState;
use leptos::prelude::*;

/// Id of the loading placeholder emitted ahead of the settled view
pub const LOADING_ELEMENT_ID: &str = "channel-loading";

const STYLESHEET: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#0f172a}\
.p-8{padding:2rem}.mb-4{margin-bottom:1rem}.mb-8{margin-bottom:2rem}\
.flex{display:flex}.items-center{align-items:center}.justify-center{justify-content:center}\
.gap-4{gap:1rem}.h-screen{height:100vh}.grid{display:grid}\
.md\\:grid-cols-4{grid-template-columns:repeat(4,minmax(0,1fr))}\
.h-20{height:5rem}.w-20{width:5rem}.rounded-full{border-radius:9999px}\
.text-3xl{font-size:1.875rem}.text-2xl{font-size:1.5rem}.text-sm{font-size:.875rem}\
.font-bold{font-weight:700}.font-medium{font-weight:500}.text-muted-foreground{color:#64748b}\
.text-right{text-align:right}\
.line-clamp-2{overflow:hidden;display:-webkit-box;-webkit-box-orient:vertical;-webkit-line-clamp:2}\
.truncate{overflow:hidden;text-overflow:ellipsis;white-space:nowrap}.max-w-md{max-width:28rem}\
.card{border:1px solid #e2e8f0;border-radius:.5rem;padding:1rem}\
.table{width:100%;border-collapse:collapse}.table td,.table th{padding:.5rem;border-bottom:1px solid #e2e8f0}";

// Components may create reactive nodes, which need an owner even when rendered once
fn with_owner(render: impl FnOnce() -> String) -> String {
    Owner::new().with(render)
}

/// Render the page body for a view state
#[must_use]
pub fn render_view(state: &ViewState) -> String {
    let state = state.clone();
    with_owner(move || view! { <ChannelDetailPage state /> }.to_html())
}

/// Render the loading placeholder, wrapped so it can be hidden once the view settles
#[must_use]
pub fn render_loading_placeholder() -> String {
    let placeholder = with_owner(|| view! { <Loading /> }.to_html());
    format!(r#"<div id="{LOADING_ELEMENT_ID}">{placeholder}</div>"#)
}

/// Render the 404 page body for an unknown `path`
#[must_use]
pub fn render_not_found(path: &str) -> String {
    let path = path.to_string();
    with_owner(move || view! { <NotFound path /> }.to_html())
}

/// Opening of the HTML document, up to and including `<body>`
#[must_use]
pub fn document_start(title: &str) -> String {
    let title = title.to_string();
    let head = with_owner(move || {
        view! {
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style inner_html=STYLESHEET></style>
            </head>
        }
        .to_html()
    });
    format!("<!DOCTYPE html><html lang=\"en\">{head}<body>")
}

/// Closing of the HTML document
#[must_use]
pub const fn document_end() -> &'static str {
    "</body></html>"
}

/// Style rule hiding the loading placeholder once the settled view follows it
#[must_use]
pub fn hide_loading_placeholder() -> String {
    format!("<style>#{LOADING_ELEMENT_ID}{{display:none}}</style>")
}

/// Complete document for a view state
#[must_use]
pub fn render_document(title: &str, state: &ViewState) -> String {
    format!("{}{}{}", document_start(title), render_view(state), document_end())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::mock::{sample_analytics, sample_channel, sample_videos};
    use crate::view::ChannelDetail;
    use channelscope_core::ChannelAnalytics;

    fn found(detail: ChannelDetail) -> ViewState {
        ViewState::Found(Box::new(detail))
    }

    fn sample_detail() -> ChannelDetail {
        ChannelDetail {
            channel: sample_channel(),
            videos: sample_videos(),
            analytics: Some(sample_analytics()),
        }
    }

    #[test]
    fn test_loading_renders_message_only() {
        let html = render_view(&ViewState::Loading);

        assert!(html.contains("Loading channel..."));
        assert!(!html.contains("Videos"));
        assert!(!html.contains("metric-card"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_not_found_renders_message_only() {
        let html = render_view(&ViewState::NotFound);

        assert!(html.contains("Channel not found"));
        assert!(!html.contains("metric-card"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_found_renders_all_regions() {
        let html = render_view(&found(sample_detail()));

        assert!(html.contains("Rust Systems Weekly"));
        assert!(html.contains("@rustsystems"));
        assert!(html.contains("https://img.example.com/rustsystems.jpg"));
        assert!(html.contains("line-clamp-2"));
        assert!(html.contains("metric-card"));
        assert!(html.contains("<table"));
        assert!(html.contains("Writing an async runtime"));
        assert!(!html.contains("Loading channel..."));
    }

    #[test]
    fn test_metrics_formatting() {
        let html = render_view(&found(sample_detail()));

        assert!(html.contains("Avg Views/Video"));
        assert!(html.contains("666,284"));
        assert!(html.contains("12.34%"));
        assert!(html.contains("47,610"));
        assert!(html.contains("3,430"));
    }

    #[test]
    fn test_engagement_card_renders_percentage() {
        let mut detail = sample_detail();
        detail.analytics = Some(ChannelAnalytics {
            avg_engagement_rate: 0.1234,
            ..sample_analytics()
        });

        assert!(render_view(&found(detail)).contains("12.34%"));
    }

    #[test]
    fn test_video_row_formatting() {
        let html = render_view(&found(sample_detail()));

        assert!(html.contains("1,234,567"));
        assert!(html.contains("45,210"));
        assert!(html.contains("3.92%"));
        assert!(html.contains("5,121"));
        assert!(html.contains("Mar 15, 2024"));
        assert!(html.contains("Jan 2, 2024"));
    }

    #[test]
    fn test_missing_rates_render_na() {
        let mut detail = sample_detail();
        detail.videos.truncate(1);
        detail.videos[0].engagement_rate = None;

        let html = render_view(&found(detail));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_rates_present_render_no_na() {
        let mut detail = sample_detail();
        detail.videos.truncate(1);

        assert!(!render_view(&found(detail)).contains("N/A"));
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let mut detail = sample_detail();
        detail.channel.description = None;

        let html = render_view(&found(detail));
        assert!(!html.contains("channel-description"));
        assert!(!html.contains("line-clamp-2"));
    }

    #[test]
    fn test_empty_description_omitted() {
        let mut detail = sample_detail();
        detail.channel.description = Some(String::new());

        assert!(!render_view(&found(detail)).contains("channel-description"));
    }

    #[test]
    fn test_whitespace_description_still_rendered() {
        let mut detail = sample_detail();
        detail.channel.description = Some("   ".to_string());

        assert!(render_view(&found(detail)).contains("channel-description"));
    }

    #[test]
    fn test_thumbnail_omitted_when_absent() {
        let mut detail = sample_detail();
        detail.channel.thumbnail_url = None;

        assert!(!render_view(&found(detail)).contains("<img"));
    }

    #[test]
    fn test_metrics_omitted_without_analytics() {
        let mut detail = sample_detail();
        detail.analytics = None;

        let html = render_view(&found(detail));
        assert!(!html.contains("metric-card"));
        assert!(html.contains("<table"));
    }

    #[test]
    fn test_channel_text_is_escaped() {
        let mut detail = sample_detail();
        detail.channel.title = "<script>alert(1)</script>".to_string();

        let html = render_view(&found(detail));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_document_shell() {
        let html = render_document("Channel <42>", &ViewState::NotFound);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Channel &lt;42&gt;"));
        assert!(!html.contains("Channel <42>"));
        assert!(html.contains(".line-clamp-2{"));
        assert!(html.contains("Channel not found"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_not_found_page_names_path() {
        let html = render_not_found("/videos/<x>");

        assert!(html.contains("Page Not Found"));
        assert!(html.contains("/videos/&lt;x&gt;"));
    }

    #[test]
    fn test_loading_placeholder_is_wrapped() {
        let html = render_loading_placeholder();

        assert!(html.starts_with(r#"<div id="channel-loading">"#));
        assert!(html.contains("Loading channel..."));
        assert!(hide_loading_placeholder().contains("#channel-loading{display:none}"));
    }
}
