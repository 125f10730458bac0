//! Binary crate for the `zipweather` command-line front.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive lookups against a running server
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Client-side failures are diagnostics, not user output; keep them quiet
    // unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
