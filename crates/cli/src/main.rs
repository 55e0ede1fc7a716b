// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use lnrs::Cli;

fn main() {
    setup_logging();

    let cli = Cli::parse();
    if let Err(e) = lnrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Engine events go to stderr; `RUST_LOG` overrides the default level.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
