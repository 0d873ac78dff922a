//! Channelscope web server and renderer

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use channelscope_core::{
    context_error::{Result, ResultExt},
    init_logging, ChannelId, Config, VideoSort,
};
use channelscope_web::{build_app, load_channel_detail, render::render_view, ApiClient};
use clap::{Parser, Subcommand};
use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};
use tokio::signal;
use tracing::{info, warn};

/// Command line interface for the channelscope dashboard
#[derive(Parser)]
#[command(
    name = "channelscope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Channel analytics dashboard",
    long_about = "Serves server-rendered channel detail pages backed by a read-only channel analytics API."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overrides the configured level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve,

    /// Fetch one channel and print its rendered detail view
    Render {
        /// Channel identifier
        #[arg(long, value_name = "ID")]
        channel: ChannelId,

        /// Number of videos to fetch (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=500))]
        limit: Option<u32>,

        /// Video sort order (overrides config)
        #[arg(long)]
        sort_by: Option<VideoSort>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = match cli.config.as_deref() {
        Some(path) => (
            Config::load_from(Some(path))
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None,
        ),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.format = "json".to_string();
    }
    init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    match cli.command {
        Some(Commands::Render {
            channel,
            limit,
            sort_by,
        }) => render(config, channel, limit, sort_by).await,
        Some(Commands::Serve) | None => serve(config).await,
    }
}

/// Run the HTTP server until Ctrl+C
async fn serve(config: Config) -> Result<()> {
    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host '{}'", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api.base_url,
        "Starting channelscope server on {addr}"
    );

    let app = build_app(config)?;
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, shutting down gracefully");
            }
        })
        .await
        .with_context(|| "Server error")
}

/// Print the settled detail view of one channel
async fn render(
    config: Config,
    channel_id: ChannelId,
    limit: Option<u32>,
    sort_by: Option<VideoSort>,
) -> Result<()> {
    let mut query = config.dashboard.video_query();
    if let Some(limit) = limit {
        query.limit = limit;
    }
    if let Some(sort_by) = sort_by {
        query.sort_by = sort_by;
    }

    let api = ApiClient::from_config(&config.api)?;
    let state = load_channel_detail(&api, channel_id, query).await;

    println!("{}", render_view(&state));
    Ok(())
}
