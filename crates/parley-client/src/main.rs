//! Parley client binary.
//!
//! Interactive console loop: read a line, encrypt it, send it, print the
//! server's encrypted echo and its decryption. Type `exit` to quit.
//!
//! # Usage
//!
//! ```bash
//! parley-client --server 127.0.0.1:8080
//! ```

// stdout is the chat user interface, not diagnostics.
#![allow(clippy::print_stdout)]

use std::io::Write;

use clap::Parser;
use parley_client::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Parley demo protocol client
#[derive(Parser, Debug)]
#[command(name = "parley-client")]
#[command(about = "Parley encrypted messaging demo client")]
#[command(version)]
struct Args {
    /// Server address to connect to
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    println!("Connecting to {}...", args.server);
    let mut session = Session::connect(&args.server).await?;
    println!("Connected. Received encryption key from server ({} bytes)", session.key().len());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nEnter message (or 'exit' to quit): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if line == "exit" {
            session.goodbye("client exit").await?;
            break;
        }

        let ciphertext = session.send(line.as_bytes()).await?;
        println!("Sent encrypted message: {}", hex::encode(&ciphertext));

        match session.recv().await? {
            Some((ciphertext, plaintext)) => {
                println!("Server reply:");
                println!("Encrypted: {}", hex::encode(&ciphertext));
                println!("Decrypted: {}", String::from_utf8_lossy(&plaintext));
            },
            None => {
                println!("Server disconnected");
                break;
            },
        }
    }

    Ok(())
}
