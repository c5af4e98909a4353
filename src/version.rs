// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the quiz harness

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Full version string with feature description
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), "-probe-launcher");

/// Supported features in this version
pub const FEATURES: &[&str] = &["navigation-stub", "connectivity-probe", "test-launcher"];
