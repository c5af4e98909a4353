// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use quiz_harness::cli::{execute, Cli};
use std::env;

#[tokio::main]
async fn main() {
    // A missing .env is fine; values may come from the real environment
    dotenv::dotenv().ok();

    // Initialize logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
    tracing::debug!("quiz-harness {}", quiz_harness::version::VERSION);

    // Parse CLI arguments
    let cli = Cli::parse();

    let code = execute(cli).await;
    std::process::exit(code);
}
