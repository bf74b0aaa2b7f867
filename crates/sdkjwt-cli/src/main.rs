//! sdkjwt CLI
//!
//! Prints a signed HS256 token for meeting SDK authentication and its
//! verification result. Check tokens at <https://jwt.io/#debugger-io> with the
//! same secret.

use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sdkjwt_cli::config::{Config, DEFAULT_LOG_FILTER};
use sdkjwt_cli::token_cmd;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );
    if config.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    debug!(version = env!("CARGO_PKG_VERSION"), "starting sdkjwt");

    token_cmd::run(&config, &mut io::stdout().lock())
}
