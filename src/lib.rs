// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod launcher;
pub mod navigation;
pub mod probe;
pub mod version;

pub use launcher::{launch, FnSuite, LaunchOutcome, LaunchState, TestSuite};
pub use navigation::{
    with_navigator, NavigateOptions, NavigationCall, NavigationError, Navigator, RouteEvent,
    RouteSnapshot, StubNavigator,
};
pub use probe::{
    check_connectivity, probe_connectivity, ClientError, Connected, DataClient,
    DataServiceConfig, MockDataClient, ProbeError, ReadError, RestDataClient,
};
