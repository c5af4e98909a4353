// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

/// Point-in-time view of the router: where we are and which locales apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSnapshot {
    pub pathname: String,
    pub route: String,
    pub as_path: String,
    pub base_path: String,
    pub query: BTreeMap<String, QueryValue>,
    pub locale: Option<String>,
    pub locales: Vec<String>,
    pub default_locale: Option<String>,
    pub is_ready: bool,
    pub is_fallback: bool,
    pub is_preview: bool,
    pub is_locale_domain: bool,
}

impl Default for RouteSnapshot {
    fn default() -> Self {
        RouteSnapshot {
            pathname: "/".to_string(),
            route: "/".to_string(),
            as_path: "/".to_string(),
            base_path: String::new(),
            query: BTreeMap::new(),
            locale: Some("en".to_string()),
            locales: vec!["en".to_string()],
            default_locale: Some("en".to_string()),
            is_ready: true,
            is_fallback: false,
            is_preview: false,
            is_locale_domain: false,
        }
    }
}

impl RouteSnapshot {
    /// Points the snapshot at `pathname`; `route` and `as_path` follow it.
    pub fn with_pathname(mut self, pathname: &str) -> Self {
        self.pathname = pathname.to_string();
        self.route = pathname.to_string();
        self.as_path = pathname.to_string();
        self
    }

    pub fn with_query(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        match self.query.get(key)? {
            QueryValue::Single(value) => Some(value.as_str()),
            QueryValue::Multiple(values) => values.first().map(String::as_str),
        }
    }
}
