//! Data types returned by the channel analytics API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

/// Channel identifier type
pub type ChannelId = i64;

/// Default number of videos requested for the detail view
pub const DEFAULT_VIDEO_LIMIT: u32 = 50;

/// Upper bound accepted for the `limit` query parameter
pub const MAX_VIDEO_LIMIT: u32 = 500;

/// Channel metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier
    pub id: ChannelId,

    /// Display title
    pub title: String,

    /// Custom handle, e.g. `@rustconf`
    #[serde(default)]
    pub custom_url: Option<String>,

    /// Avatar image URL
    #[serde(default)]
    pub thumbnail_url: Option<String>,

    /// Channel description
    #[serde(default)]
    pub description: Option<String>,
}

/// A single video with engagement figures computed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Video identifier
    pub id: String,

    /// Video title
    pub title: String,

    /// When the video was published
    pub published_at: DateTime<Utc>,

    /// View count
    pub view_count: u64,

    /// Like count
    pub like_count: u64,

    /// Comment count
    pub comment_count: u64,

    /// Interactions relative to views, as a ratio
    #[serde(default)]
    pub engagement_rate: Option<f64>,

    /// Average views per day since publication
    #[serde(default)]
    pub views_per_day: Option<f64>,
}

/// Aggregate analytics for a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAnalytics {
    /// Average views per video
    pub avg_views_per_video: f64,

    /// Average engagement rate, as a ratio
    pub avg_engagement_rate: f64,

    /// Sum of likes across all videos
    pub total_likes: u64,

    /// Sum of comments across all videos
    pub total_comments: u64,
}

/// Sort keys accepted by the channel videos endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSort {
    /// Most viewed first
    #[default]
    ViewCount,
    /// Most liked first
    LikeCount,
    /// Most commented first
    CommentCount,
    /// Newest first
    PublishedAt,
    /// Highest engagement rate first
    EngagementRate,
    /// Fastest growing first
    ViewsPerDay,
}

impl VideoSort {
    /// All sort keys, in display order
    pub const ALL: [Self; 6] = [
        Self::ViewCount,
        Self::LikeCount,
        Self::CommentCount,
        Self::PublishedAt,
        Self::EngagementRate,
        Self::ViewsPerDay,
    ];

    /// Wire name used in the `sort_by` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewCount => "view_count",
            Self::LikeCount => "like_count",
            Self::CommentCount => "comment_count",
            Self::PublishedAt => "published_at",
            Self::EngagementRate => "engagement_rate",
            Self::ViewsPerDay => "views_per_day",
        }
    }
}

impl fmt::Display for VideoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoSort {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| crate::Error::Validation {
                field: "sort_by".to_string(),
                message: format!("unknown sort key '{s}'"),
            })
    }
}

/// Options for fetching a page of a channel's videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VideoQuery {
    /// Maximum number of videos to return
    #[validate(range(min = 1, max = 500))]
    pub limit: u32,

    /// Sort order
    pub sort_by: VideoSort,
}

impl Default for VideoQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_VIDEO_LIMIT,
            sort_by: VideoSort::ViewCount,
        }
    }
}

impl VideoQuery {
    /// Encode as a URL query string, e.g. `limit=50&sort_by=view_count`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails validation.
    pub fn to_query_string(&self) -> crate::Result<String> {
        self.validate()?;
        serde_urlencoded::to_string(self).map_err(|e| crate::Error::Other(e.to_string()))
    }
}
