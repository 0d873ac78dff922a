//! Page components for the web interface

pub mod channel_detail;
pub mod not_found;

pub use channel_detail::ChannelDetailPage;
pub use not_found::NotFound;
