// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{DataClient, ReadError};

/// In-memory stand-in for the data service.
#[derive(Debug, Clone, Default)]
pub struct MockDataClient {
    tables: Arc<Mutex<HashMap<String, Vec<JsonValue>>>>,
    injected_error: Arc<Mutex<Option<ReadError>>>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MockDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_rows(&self, table: &str, rows: Vec<JsonValue>) {
        let mut tables = self.tables.lock().await;
        tables.entry(table.to_string()).or_default().extend(rows);
    }

    /// The next read fails with `error`; later reads are unaffected.
    pub async fn inject_error(&self, error: ReadError) {
        *self.injected_error.lock().await = Some(error);
    }

    /// Tables read so far, in order.
    pub async fn reads(&self) -> Vec<String> {
        self.reads.lock().await.clone()
    }
}

#[async_trait]
impl DataClient for MockDataClient {
    async fn select(
        &self,
        table: &str,
        _columns: &str,
        limit: usize,
    ) -> Result<Vec<JsonValue>, ReadError> {
        self.reads.lock().await.push(table.to_string());

        if let Some(error) = self.injected_error.lock().await.take() {
            return Err(error);
        }

        let tables = self.tables.lock().await;
        match tables.get(table) {
            Some(rows) => Ok(rows.iter().take(limit).cloned().collect()),
            None => Err(ReadError::Service {
                status: 404,
                message: format!("relation \"public.{}\" does not exist", table),
            }),
        }
    }
}
