// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;
use url::Url;

use super::ClientError;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Where the hosted data service lives and how to authenticate against it.
#[derive(Clone, Serialize, Deserialize)]
pub struct DataServiceConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for DataServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataServiceConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl DataServiceConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Reads `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `PROBE_TIMEOUT_SECONDS`.
    /// The first two are also accepted with a `NEXT_PUBLIC_` prefix.
    pub fn from_env() -> Result<Self, ClientError> {
        let url = read_var("SUPABASE_URL")
            .ok_or_else(|| ClientError::MissingConfig("SUPABASE_URL".to_string()))?;
        let anon_key = read_var("SUPABASE_ANON_KEY")
            .ok_or_else(|| ClientError::MissingConfig("SUPABASE_ANON_KEY".to_string()))?;
        let timeout_seconds = match env::var("PROBE_TIMEOUT_SECONDS") {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Ignoring unparseable PROBE_TIMEOUT_SECONDS '{}', using {}s",
                    value, DEFAULT_TIMEOUT_SECONDS
                );
                DEFAULT_TIMEOUT_SECONDS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            url,
            anon_key,
            timeout_seconds,
        })
    }

    /// Checks the settings are usable and returns the parsed base URL.
    pub fn validate(&self) -> Result<Url, ClientError> {
        if self.url.trim().is_empty() {
            return Err(ClientError::MissingConfig("url".to_string()));
        }
        if self.anon_key.trim().is_empty() {
            return Err(ClientError::MissingConfig("anon_key".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(ClientError::InvalidTimeout(self.timeout_seconds));
        }

        let url = Url::parse(self.url.trim())
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                scheme, self.url
            ))),
        }
    }
}

/// Non-blank value of `name`, falling back to `NEXT_PUBLIC_<name>`.
pub(crate) fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .or_else(|_| env::var(format!("NEXT_PUBLIC_{}", name)))
        .ok()
        .filter(|value| !value.trim().is_empty())
}
