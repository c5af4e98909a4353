// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Components receive their navigator explicitly; tests hand them the stub

use anyhow::Result;
use quiz_harness::navigation::{NavigateOptions, Navigator, StubNavigator};
use std::sync::Arc;

/// Minimal quiz pager: moves to the next question, or to results at the end.
struct QuizPager {
    navigator: Arc<dyn Navigator>,
    total_questions: u32,
}

impl QuizPager {
    fn new(navigator: Arc<dyn Navigator>, total_questions: u32) -> Self {
        Self {
            navigator,
            total_questions,
        }
    }

    fn current_question(&self) -> u32 {
        self.navigator
            .snapshot()
            .query_param("id")
            .and_then(|id| id.parse().ok())
            .unwrap_or(1)
    }

    async fn advance(&self) -> Result<bool> {
        let next = self.current_question() + 1;
        if next > self.total_questions {
            return Ok(self
                .navigator
                .replace("/results", NavigateOptions::default())
                .await?);
        }

        let url = format!("/quiz/{}", next);
        self.navigator.prefetch(&url).await?;
        Ok(self.navigator.push(&url, NavigateOptions::default()).await?)
    }
}

#[tokio::test]
async fn test_pager_pushes_next_question() {
    let stub = StubNavigator::with_snapshot(
        quiz_harness::RouteSnapshot::default()
            .with_pathname("/quiz/[id]")
            .with_query("id", "2"),
    );
    let pager = QuizPager::new(Arc::new(stub.clone()), 5);

    assert!(pager.advance().await.unwrap());
    assert_eq!(stub.pushed_urls(), vec!["/quiz/3".to_string()]);
}

#[tokio::test]
async fn test_pager_replaces_with_results_after_last_question() {
    let stub = StubNavigator::with_snapshot(
        quiz_harness::RouteSnapshot::default()
            .with_pathname("/quiz/[id]")
            .with_query("id", "5"),
    );
    let pager = QuizPager::new(Arc::new(stub.clone()), 5);

    assert!(pager.advance().await.unwrap());
    assert!(stub.pushed_urls().is_empty());
    assert_eq!(
        stub.calls(),
        vec![quiz_harness::NavigationCall::Replace {
            url: "/results".to_string(),
            options: NavigateOptions::default(),
        }]
    );
}

#[tokio::test]
async fn test_independent_stubs_do_not_share_state() {
    let first = StubNavigator::new();
    let second = StubNavigator::new();

    QuizPager::new(Arc::new(first.clone()), 3)
        .advance()
        .await
        .unwrap();

    assert_eq!(first.pushed_urls(), vec!["/quiz/2".to_string()]);
    assert!(second.calls().is_empty());
}
