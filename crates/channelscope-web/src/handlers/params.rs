//! Query-string overrides shared by the detail routes

use axum::http::StatusCode;
use channelscope_core::{VideoQuery, VideoSort};
use serde::Deserialize;
use validator::Validate;

/// Optional `?limit=` and `?sort_by=` overrides of the configured video query
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct DetailParams {
    /// Number of videos to fetch
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u32>,
    /// Video sort order
    pub sort_by: Option<VideoSort>,
}

impl DetailParams {
    /// Apply the overrides on top of `defaults`
    ///
    /// # Errors
    ///
    /// Returns `400 Bad Request` with a message when `limit` is out of range.
    pub fn resolve(self, defaults: VideoQuery) -> Result<VideoQuery, (StatusCode, String)> {
        self.validate().map_err(|e| {
            let error = channelscope_core::Error::from(e);
            (StatusCode::BAD_REQUEST, error.to_string())
        })?;

        Ok(VideoQuery {
            limit: self.limit.unwrap_or(defaults.limit),
            sort_by: self.sort_by.unwrap_or(defaults.sort_by),
        })
    }
}
