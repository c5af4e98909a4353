// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runs a test suite and reduces its outcome to a process exit code.
//!
//! ```text
//! Running ──ok──▶ Success (exit 0)
//!    └────err/panic──▶ Failure (exit 1)
//! ```

pub mod suite;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

pub use suite::{FnSuite, TestSuite};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchState {
    Running,
    Success,
    Failure,
}

impl LaunchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LaunchState::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    /// Carries the rendered error of whatever the suite raised.
    Failure(String),
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Success => EXIT_SUCCESS,
            LaunchOutcome::Failure(_) => EXIT_FAILURE,
        }
    }

    pub fn state(&self) -> LaunchState {
        match self {
            LaunchOutcome::Success => LaunchState::Success,
            LaunchOutcome::Failure(_) => LaunchState::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success)
    }
}

impl From<LaunchOutcome> for ExitCode {
    fn from(outcome: LaunchOutcome) -> Self {
        match outcome {
            LaunchOutcome::Success => ExitCode::SUCCESS,
            LaunchOutcome::Failure(_) => ExitCode::FAILURE,
        }
    }
}

/// Awaits `suite` once. A returned error and a panic are both failures.
pub async fn launch<S: TestSuite + ?Sized>(suite: &S) -> LaunchOutcome {
    info!("▶️  Running test suite '{}'", suite.name());
    let started = Instant::now();

    let result = AssertUnwindSafe(suite.run()).catch_unwind().await;
    let elapsed_ms = started.elapsed().as_millis();

    match result {
        Ok(Ok(())) => {
            info!("✅ Test suite '{}' passed in {}ms", suite.name(), elapsed_ms);
            LaunchOutcome::Success
        }
        Ok(Err(e)) => {
            error!("❌ Test suite '{}' failed: {:#}", suite.name(), e);
            LaunchOutcome::Failure(format!("{:#}", e))
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            error!("❌ Test suite '{}' panicked: {}", suite.name(), message);
            LaunchOutcome::Failure(message)
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
