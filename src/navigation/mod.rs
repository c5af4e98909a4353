// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client-side navigation capability.
//!
//! Components that need to move between pages take a [`Navigator`] as an
//! explicit argument instead of reaching for a process-wide router. Tests hand
//! them a [`StubNavigator`], which answers every call immediately and keeps a
//! log of what was asked for.

pub mod snapshot;
pub mod stub;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub use snapshot::{QueryValue, RouteSnapshot};
pub use stub::{NavigationCall, StubNavigator};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Navigation aborted: {0}")]
    Aborted(String),
}

/// Router events a component can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteEvent {
    RouteChangeStart,
    RouteChangeComplete,
    RouteChangeError,
    BeforeHistoryChange,
    HashChangeStart,
    HashChangeComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

pub type EventHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Decides whether a history pop should be handled; receives the target URL.
pub type PopStateGuard = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateOptions {
    pub as_path: Option<String>,
    pub shallow: bool,
    pub locale: Option<String>,
    pub scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        NavigateOptions {
            as_path: None,
            shallow: false,
            locale: None,
            scroll: true,
        }
    }
}

#[async_trait]
pub trait Navigator: Send + Sync {
    /// Current route state.
    fn snapshot(&self) -> &RouteSnapshot;

    /// Navigate to `url`, adding a history entry. Resolves to `true` once the
    /// route change completes.
    async fn push(&self, url: &str, options: NavigateOptions) -> Result<bool, NavigationError>;

    /// Navigate to `url`, replacing the current history entry.
    async fn replace(&self, url: &str, options: NavigateOptions)
        -> Result<bool, NavigationError>;

    async fn prefetch(&self, url: &str) -> Result<(), NavigationError>;

    fn back(&self);

    fn reload(&self);

    fn before_pop_state(&self, guard: PopStateGuard);

    fn on(&self, event: RouteEvent, handler: EventHandler) -> SubscriptionId;

    fn off(&self, event: RouteEvent, id: SubscriptionId);

    fn emit(&self, event: RouteEvent, url: &str);
}

/// Higher-order wrapper for components that expect routing to be provided to
/// them. Navigation is passed explicitly, so this hands the component back
/// untouched.
pub fn with_navigator<C>(component: C) -> C {
    component
}
