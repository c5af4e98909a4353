// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! REST client for the hosted data service.
//!
//! The service exposes each table under `/rest/v1/<table>` and accepts
//! PostgREST-style query parameters (`select`, `limit`). Requests carry the
//! project's anon key both as `apikey` and as a bearer token.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::{ClientError, DataServiceConfig, ReadError};

#[async_trait]
pub trait DataClient: Send + Sync {
    /// Reads at most `limit` rows of `columns` from `table`.
    async fn select(
        &self,
        table: &str,
        columns: &str,
        limit: usize,
    ) -> Result<Vec<JsonValue>, ReadError>;
}

/// Error payload returned by the service on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl ServiceErrorBody {
    fn describe(self) -> Option<String> {
        let mut text = self.message?;
        if let Some(code) = self.code {
            text.push_str(&format!(" (code {})", code));
        }
        if let Some(details) = self.details {
            text.push_str(&format!(": {}", details));
        }
        if let Some(hint) = self.hint {
            text.push_str(&format!(" [hint: {}]", hint));
        }
        Some(text)
    }
}

pub struct RestDataClient {
    http: Client,
    base_url: Url,
    anon_key: String,
}

impl RestDataClient {
    pub fn from_config(config: &DataServiceConfig) -> Result<Self, ClientError> {
        let base_url = config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            anon_key: config.anon_key.clone(),
        })
    }

    /// Shorthand for [`DataServiceConfig::from_env`] followed by
    /// [`RestDataClient::from_config`].
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(&DataServiceConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn table_url(&self, table: &str, columns: &str, limit: usize) -> Result<Url, ReadError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ReadError::Network(format!("cannot build path on {}", self.base_url)))?
            .pop_if_empty()
            .extend(&["rest", "v1", table]);
        url.query_pairs_mut()
            .append_pair("select", columns)
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl DataClient for RestDataClient {
    async fn select(
        &self,
        table: &str,
        columns: &str,
        limit: usize,
    ) -> Result<Vec<JsonValue>, ReadError> {
        let url = self.table_url(table, columns, limit)?;
        debug!("Selecting from {}", url);

        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ReadError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReadError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(ServiceErrorBody::describe)
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        body.clone()
                    }
                });
            return Err(ReadError::Service {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<Vec<JsonValue>>(&body).map_err(|e| ReadError::Decode(e.to_string()))
    }
}
