//! Reusable view components for the channel detail page

pub mod channel_header;
pub mod loading;
pub mod metrics;
pub mod video_table;

pub use channel_header::ChannelHeader;
pub use loading::{Loading, StatusMessage, LOADING_MESSAGE, NOT_FOUND_MESSAGE};
pub use metrics::{MetricCard, MetricsSummary};
pub use video_table::VideoTable;
