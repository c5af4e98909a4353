// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Tests for the connectivity probe against the in-memory client

use quiz_harness::probe::{
    check_connectivity, probe_connectivity, probe_table, ClientError, MockDataClient,
    ProbeError, ReadError, PROBE_TABLE,
};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

async fn seeded_client() -> MockDataClient {
    let client = MockDataClient::new();
    client
        .insert_rows(
            PROBE_TABLE,
            vec![
                json!({ "id": 1, "prompt": "What is ownership?" }),
                json!({ "id": 2, "prompt": "What is borrowing?" }),
            ],
        )
        .await;
    client
}

/// Captures formatted log output for the current thread.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[tokio::test]
async fn test_read_success_returns_true() {
    let client = seeded_client().await;
    let (logs, _guard) = capture_logs();

    assert!(check_connectivity(|| Ok(client.clone())).await);

    let lines = logs.lines();
    let successes: Vec<_> = lines
        .iter()
        .filter(|l| l.contains("Connected to data service"))
        .collect();
    assert_eq!(successes.len(), 1, "log output: {:?}", lines);
    assert!(!lines.iter().any(|l| l.contains("failed")));
}

#[tokio::test]
async fn test_probe_reads_one_row_from_questions() {
    let client = seeded_client().await;

    let connected = probe_connectivity(|| Ok(client.clone())).await.unwrap();

    assert_eq!(connected.table, "questions");
    assert_eq!(connected.rows, 1);
    assert_eq!(client.reads().await, vec!["questions".to_string()]);
}

#[tokio::test]
async fn test_factory_failure_returns_false_without_reading() {
    let client = seeded_client().await;
    let (logs, _guard) = capture_logs();

    let reachable = check_connectivity(|| -> Result<MockDataClient, ClientError> {
        Err(ClientError::MissingConfig("SUPABASE_URL".to_string()))
    })
    .await;

    assert!(!reachable);
    assert!(client.reads().await.is_empty());
    let failures: Vec<_> = logs
        .lines()
        .into_iter()
        .filter(|l| l.contains("Connectivity check failed") && l.contains("SUPABASE_URL"))
        .collect();
    assert_eq!(failures.len(), 1);
}

#[tokio::test]
async fn test_factory_failure_is_typed() {
    let result = probe_connectivity(|| -> Result<MockDataClient, ClientError> {
        Err(ClientError::InvalidUrl("nope".to_string()))
    })
    .await;

    assert!(matches!(
        result,
        Err(ProbeError::HandleConstructionFailed(ClientError::InvalidUrl(_)))
    ));
}

#[tokio::test]
async fn test_permission_denied_returns_false_and_logs_detail() {
    let client = seeded_client().await;
    client
        .inject_error(ReadError::Service {
            status: 401,
            message: "permission denied".to_string(),
        })
        .await;
    let (logs, _guard) = capture_logs();

    assert!(!check_connectivity(|| Ok(client.clone())).await);

    let failures: Vec<_> = logs
        .lines()
        .into_iter()
        .filter(|l| l.contains("Connectivity check failed"))
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("permission denied"));
}

#[tokio::test]
async fn test_read_failure_is_typed_with_table() {
    let client = seeded_client().await;
    client
        .inject_error(ReadError::Network("connection reset".to_string()))
        .await;

    match probe_connectivity(|| Ok(client.clone())).await {
        Err(ProbeError::ReadFailed { table, source }) => {
            assert_eq!(table, "questions");
            assert!(matches!(source, ReadError::Network(_)));
        }
        other => panic!("Expected ReadFailed, got: {:?}", other),
    }

    // Injected errors only affect one read; no retry happened in between.
    assert_eq!(client.reads().await.len(), 1);
    assert!(check_connectivity(|| Ok(client.clone())).await);
}

#[tokio::test]
async fn test_empty_table_counts_as_connected() {
    let client = MockDataClient::new();
    client.insert_rows(PROBE_TABLE, vec![]).await;

    let connected = probe_connectivity(|| Ok(client.clone())).await.unwrap();
    assert_eq!(connected.rows, 0);
    assert!(check_connectivity(|| Ok(client.clone())).await);
}

#[tokio::test]
async fn test_missing_table_is_read_failure() {
    let client = seeded_client().await;

    let result = probe_table(|| Ok(client.clone()), "answers").await;
    assert!(matches!(
        result,
        Err(ProbeError::ReadFailed {
            source: ReadError::Service { status: 404, .. },
            ..
        })
    ));
}
