// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Connectivity probe for the hosted data service.
//!
//! A probe builds a client handle, reads a single row from a known table and
//! reports whether that worked. It confirms the service is reachable and
//! answering; it says nothing about schema or data.

pub mod client;
pub mod config;
pub mod mock;

use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info};

pub use client::{DataClient, RestDataClient};
pub use config::DataServiceConfig;
pub use mock::MockDataClient;

/// Table the probe reads from.
pub const PROBE_TABLE: &str = "questions";
const PROBE_COLUMNS: &str = "*";
const PROBE_LIMIT: usize = 1;

/// Failure to build a client handle.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid timeout: {0}s (must be at least 1)")]
    InvalidTimeout(u64),
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Failure reported by a read.
#[derive(Debug, Clone, Error)]
pub enum ReadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Could not create data service client: {0}")]
    HandleConstructionFailed(#[source] ClientError),
    #[error("Read from '{table}' failed: {source}")]
    ReadFailed {
        table: String,
        #[source]
        source: ReadError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connected {
    pub table: String,
    /// Rows the read returned. Zero still counts as connected.
    pub rows: usize,
    pub latency: Duration,
}

/// Probes the default [`PROBE_TABLE`].
pub async fn probe_connectivity<C, F>(factory: F) -> Result<Connected, ProbeError>
where
    C: DataClient,
    F: FnOnce() -> Result<C, ClientError>,
{
    probe_table(factory, PROBE_TABLE).await
}

pub async fn probe_table<C, F>(factory: F, table: &str) -> Result<Connected, ProbeError>
where
    C: DataClient,
    F: FnOnce() -> Result<C, ClientError>,
{
    let client = factory().map_err(ProbeError::HandleConstructionFailed)?;

    let started = Instant::now();
    let rows = client
        .select(table, PROBE_COLUMNS, PROBE_LIMIT)
        .await
        .map_err(|source| ProbeError::ReadFailed {
            table: table.to_string(),
            source,
        })?;

    Ok(Connected {
        table: table.to_string(),
        rows: rows.len(),
        latency: started.elapsed(),
    })
}

/// Boolean form of [`probe_connectivity`]. Logs one line either way and
/// never fails.
pub async fn check_connectivity<C, F>(factory: F) -> bool
where
    C: DataClient,
    F: FnOnce() -> Result<C, ClientError>,
{
    check_table(factory, PROBE_TABLE).await
}

pub async fn check_table<C, F>(factory: F, table: &str) -> bool
where
    C: DataClient,
    F: FnOnce() -> Result<C, ClientError>,
{
    match probe_table(factory, table).await {
        Ok(connected) => {
            info!(
                "✅ Connected to data service: read {} row(s) from '{}' in {}ms",
                connected.rows,
                connected.table,
                connected.latency.as_millis()
            );
            true
        }
        Err(e) => {
            error!("❌ Connectivity check failed: {}", e);
            false
        }
    }
}
