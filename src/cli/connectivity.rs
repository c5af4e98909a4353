// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use tracing::info;

use crate::launcher::{self, TestSuite, EXIT_FAILURE, EXIT_SUCCESS};
use crate::probe::{
    self,
    config::{read_var, DEFAULT_TIMEOUT_SECONDS},
    DataServiceConfig, RestDataClient, PROBE_TABLE,
};

/// Connection settings shared by every command
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base URL of the data service
    #[arg(long, env = "SUPABASE_URL")]
    pub url: Option<String>,

    /// Anon API key for the data service
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub anon_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PROBE_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Table to read from
    #[arg(long, default_value = PROBE_TABLE)]
    pub table: String,
}

impl ConnectionArgs {
    /// Flags win, then the same environment names `DataServiceConfig::from_env`
    /// reads. Missing values are reported by the client factory, not here, so
    /// the probe can log them like any other construction failure.
    fn config(&self) -> DataServiceConfig {
        let url = self
            .url
            .clone()
            .or_else(|| read_var("SUPABASE_URL"))
            .unwrap_or_default();
        let anon_key = self
            .anon_key
            .clone()
            .or_else(|| read_var("SUPABASE_ANON_KEY"))
            .unwrap_or_default();
        DataServiceConfig::new(url, anon_key).with_timeout_seconds(self.timeout_seconds)
    }
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn probe(args: ProbeArgs) -> i32 {
    let connection = args.connection;
    let config = connection.config();
    info!("Probing '{}' at {}", connection.table, config.url);

    let reachable =
        probe::check_table(|| RestDataClient::from_config(&config), &connection.table).await;

    if reachable {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Suite that passes when the data service answers a probe read.
pub struct ConnectivitySuite {
    config: DataServiceConfig,
    table: String,
}

impl ConnectivitySuite {
    pub fn new(config: DataServiceConfig, table: impl Into<String>) -> Self {
        Self {
            config,
            table: table.into(),
        }
    }
}

#[async_trait]
impl TestSuite for ConnectivitySuite {
    fn name(&self) -> &str {
        "connectivity"
    }

    async fn run(&self) -> Result<()> {
        let connected =
            probe::probe_table(|| RestDataClient::from_config(&self.config), &self.table)
                .await?;
        info!("Read {} row(s) from '{}'", connected.rows, connected.table);
        Ok(())
    }
}

/// Launches the connectivity suite and returns its exit code: 0 when the read
/// succeeds, 1 otherwise. Flags or `PROBE_TIMEOUT_SECONDS` values clap cannot
/// parse never get here; clap reports them and exits with code 2.
pub async fn run(args: RunArgs) -> i32 {
    let suite = ConnectivitySuite::new(args.connection.config(), args.connection.table);
    launcher::launch(&suite).await.exit_code()
}
