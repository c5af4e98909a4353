// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

/// Something the launcher can run. Resolve `Ok(())` when every test passed,
/// return an error otherwise.
#[async_trait]
pub trait TestSuite: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> Result<()>;
}

/// Wraps an async closure as a [`TestSuite`].
pub struct FnSuite<F> {
    name: String,
    routine: F,
}

impl<F, Fut> FnSuite<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    pub fn new(name: impl Into<String>, routine: F) -> Self {
        Self {
            name: name.into(),
            routine,
        }
    }
}

#[async_trait]
impl<F, Fut> TestSuite for FnSuite<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self) -> Result<()> {
        (self.routine)().await
    }
}
