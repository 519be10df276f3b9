//! ee - global configuration management tool
//!
//! A command-line tool for inspecting and editing the flat key-value
//! configuration file shared by ee services.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ee::cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.debug);

    if let Err(e) = cli.execute() {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "ee=debug" } else { "ee=info" };

    // Logs go to stderr; stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
