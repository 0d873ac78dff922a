//! Configuration management for the channelscope dashboard

use crate::types::{VideoQuery, VideoSort, DEFAULT_VIDEO_LIMIT, MAX_VIDEO_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CHANNELSCOPE";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream analytics API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Channel detail view defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Analytics API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the analytics API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `X-API-Key`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Channel detail view defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of videos listed on the detail page
    #[serde(default = "default_video_limit")]
    pub video_limit: u32,

    /// Sort order of the videos table
    #[serde(default)]
    pub video_sort: VideoSort,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_video_limit() -> u32 {
    DEFAULT_VIDEO_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            video_limit: default_video_limit(),
            video_sort: VideoSort::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DashboardConfig {
    /// Video query used when the request does not override it
    #[must_use]
    pub const fn video_query(&self) -> VideoQuery {
        VideoQuery {
            limit: self.video_limit,
            sort_by: self.video_sort,
        }
    }
}

impl Config {
    /// Load configuration from `channelscope.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when given
    ///
    /// Environment variables (`CHANNELSCOPE_API__BASE_URL`, ...) override file values.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with `env` standing in for the process environment when given
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("channelscope").required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot work at runtime
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending key.
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |message: &str| {
            Err(crate::Error::Configuration {
                message: message.to_string(),
            })
        };

        if self.api.base_url.trim().is_empty() {
            return invalid("api.base_url must not be empty");
        }
        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            return invalid("api.base_url must start with http:// or https://");
        }
        if self.api.request_timeout == 0 {
            return invalid("api.request_timeout must be greater than zero");
        }
        if self.dashboard.video_limit == 0 || self.dashboard.video_limit > MAX_VIDEO_LIMIT {
            return invalid("dashboard.video_limit must be between 1 and 500");
        }
        if !matches!(self.logging.format.as_str(), "json" | "text") {
            return invalid("logging.format must be 'json' or 'text'");
        }

        Ok(())
    }
}
