//! Parley server binary.
//!
//! # Usage
//!
//! ```bash
//! # Fixed demo key (default, compatible with the reference peer)
//! parley-server --bind 127.0.0.1:8080
//!
//! # Derive the session key from a file's content
//! parley-server --bind 127.0.0.1:8080 --key-file opencv_frame_0.png
//! ```

use clap::Parser;
use parley_server::{KeySource, Server, ServerConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Parley demo protocol server
#[derive(Parser, Debug)]
#[command(name = "parley-server")]
#[command(about = "Parley encrypted messaging demo server")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Fixed session key
    #[arg(short, long, conflicts_with = "key_file")]
    key: Option<String>,

    /// Derive the session key from this file's content
    #[arg(long)]
    key_file: Option<std::path::PathBuf>,

    /// How many recent messages to keep per session
    #[arg(long, default_value = "10")]
    history_limit: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Parley server starting");
    tracing::info!("Binding to {}", args.bind);

    let key_source = match (args.key, args.key_file) {
        (Some(key), _) => KeySource::Fixed(key),
        (None, Some(path)) => KeySource::File(path),
        (None, None) => {
            tracing::warn!("No key configured - using the fixed demo key");
            KeySource::default()
        },
    };

    let config = ServerConfig {
        bind_address: args.bind,
        key_source,
        history_limit: args.history_limit,
    };

    let server = Server::bind(config).await?;

    tracing::info!("Server listening on {}", server.local_addr()?);

    server.run().await?;

    Ok(())
}
