// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod connectivity;

use clap::{Parser, Subcommand};

/// Quiz app test harness
#[derive(Parser, Debug)]
#[command(name = "quiz-harness")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Connectivity probe and test launcher for the quiz app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the data service is reachable
    Probe(connectivity::ProbeArgs),

    /// Run the connectivity suite and exit with its status
    Run(connectivity::RunArgs),
}

/// Execute CLI command, returning the process exit code
pub async fn execute(cli: Cli) -> i32 {
    match cli.command {
        Commands::Probe(args) => connectivity::probe(args).await,
        Commands::Run(args) => connectivity::run(args).await,
    }
}
