// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::{
    EventHandler, NavigateOptions, NavigationError, Navigator, PopStateGuard, RouteEvent,
    RouteSnapshot, SubscriptionId,
};

/// A request made against a [`StubNavigator`], kept for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCall {
    Push { url: String, options: NavigateOptions },
    Replace { url: String, options: NavigateOptions },
    Prefetch { url: String },
    Back,
    Reload,
    BeforePopState,
    Subscribe { event: RouteEvent, id: SubscriptionId },
    Unsubscribe { event: RouteEvent, id: SubscriptionId },
    Emit { event: RouteEvent, url: String },
}

/// Inert navigator for tests. Nothing it is asked to do ever happens; it only
/// remembers being asked. Clones share the same call log.
#[derive(Debug, Clone)]
pub struct StubNavigator {
    snapshot: Arc<RouteSnapshot>,
    calls: Arc<Mutex<Vec<NavigationCall>>>,
    next_subscription: Arc<AtomicU64>,
}

impl StubNavigator {
    pub fn new() -> Self {
        Self::with_snapshot(RouteSnapshot::default())
    }

    pub fn with_snapshot(snapshot: RouteSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            calls: Arc::new(Mutex::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn calls(&self) -> Vec<NavigationCall> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// URLs passed to `push`, in call order.
    pub fn pushed_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                NavigationCall::Push { url, .. } => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        match self.calls.lock() {
            Ok(mut calls) => calls.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn record(&self, call: NavigationCall) {
        debug!("Stub navigator recorded {:?}", call);
        match self.calls.lock() {
            Ok(mut calls) => calls.push(call),
            Err(poisoned) => poisoned.into_inner().push(call),
        }
    }
}

impl Default for StubNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for StubNavigator {
    fn snapshot(&self) -> &RouteSnapshot {
        &self.snapshot
    }

    async fn push(&self, url: &str, options: NavigateOptions) -> Result<bool, NavigationError> {
        self.record(NavigationCall::Push {
            url: url.to_string(),
            options,
        });
        Ok(true)
    }

    async fn replace(
        &self,
        url: &str,
        options: NavigateOptions,
    ) -> Result<bool, NavigationError> {
        self.record(NavigationCall::Replace {
            url: url.to_string(),
            options,
        });
        Ok(true)
    }

    async fn prefetch(&self, url: &str) -> Result<(), NavigationError> {
        self.record(NavigationCall::Prefetch {
            url: url.to_string(),
        });
        Ok(())
    }

    fn back(&self) {
        self.record(NavigationCall::Back);
    }

    fn reload(&self) {
        self.record(NavigationCall::Reload);
    }

    fn before_pop_state(&self, _guard: PopStateGuard) {
        self.record(NavigationCall::BeforePopState);
    }

    fn on(&self, event: RouteEvent, _handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.record(NavigationCall::Subscribe { event, id });
        id
    }

    fn off(&self, event: RouteEvent, id: SubscriptionId) {
        self.record(NavigationCall::Unsubscribe { event, id });
    }

    // Handlers are never invoked.
    fn emit(&self, event: RouteEvent, url: &str) {
        self.record(NavigationCall::Emit {
            event,
            url: url.to_string(),
        });
    }
}
