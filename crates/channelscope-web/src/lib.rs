//! Channelscope web interface
//!
//! Server-rendered channel detail pages over a read-only analytics API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod handlers;
pub mod mock;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;
pub mod view;

// Re-export the main functions
pub use api_client::{AnalyticsApi, ApiClient};
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
pub use view::{load_channel_detail, ChannelDetail, ChannelDetailView, ViewState};
