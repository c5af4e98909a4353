// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Probe behaviour checked against a mockall double of the client seam

use async_trait::async_trait;
use mockall::mock;
use quiz_harness::probe::{check_connectivity, DataClient, ReadError};
use serde_json::{json, Value as JsonValue};

mock! {
    pub Service {}

    #[async_trait]
    impl DataClient for Service {
        async fn select(
            &self,
            table: &str,
            columns: &str,
            limit: usize,
        ) -> Result<Vec<JsonValue>, ReadError>;
    }
}

#[tokio::test]
async fn test_probe_issues_single_bounded_read() {
    let mut service = MockService::new();
    service
        .expect_select()
        .withf(|table, columns, limit| {
            table.to_string() == "questions" && columns.to_string() == "*" && *limit == 1
        })
        .times(1)
        .returning(|_, _, _| Ok(vec![json!({ "id": 1 })]));

    assert!(check_connectivity(|| Ok(service)).await);
}

#[tokio::test]
async fn test_decode_error_is_not_connected() {
    let mut service = MockService::new();
    service
        .expect_select()
        .times(1)
        .returning(|_, _, _| Err(ReadError::Decode("expected array".to_string())));

    assert!(!check_connectivity(|| Ok(service)).await);
}
