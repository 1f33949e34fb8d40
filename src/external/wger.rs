// ABOUTME: Wger public exercise-catalog API client
// ABOUTME: Implements the catalog fetch behind the ExerciseCatalog trait, plus a mock twin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Wger Exercise Catalog Client
//!
//! One outbound `GET {base}/exercise/?language=N&limit=M` against the public
//! Wger API, expecting a JSON body with a `results` array of
//! `{name, description}` objects. Entries lacking a name are discarded at
//! parse time. No retry, no fallback data source; a transport or status
//! failure surfaces as an external-service error that the caller renders as
//! an inline "unavailable" message.
//!
//! # API Reference
//! Wger REST API: <https://wger.de/en/software/api>

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Wger catalog client configuration
#[derive(Debug, Clone)]
pub struct WgerConfig {
    /// Base URL for the Wger API (default: <https://wger.de/api/v2>)
    pub base_url: String,
    /// Wger language id selecting the result language (default: 2, English)
    pub language: u32,
    /// Result-count limit per fetch (default: 200)
    pub limit: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WgerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wger.de/api/v2".to_owned(),
            language: 2,
            limit: 200,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// One catalog exercise, already filtered to entries that carry a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Free-text description, possibly containing HTML markup
    pub description: String,
}

/// Wire shape of one catalog entry; name and description are both optional
/// in practice, and nameless entries are dropped.
#[derive(Debug, Deserialize)]
struct RawExercise {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Wire shape of the catalog list response
#[derive(Debug, Deserialize)]
struct ExercisePage {
    #[serde(default)]
    results: Vec<RawExercise>,
}

/// Exercise-catalog seam so the suggestion flow is testable without a network
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Fetch one batch of candidate exercises
    async fn fetch_exercises(&self) -> AppResult<Vec<Exercise>>;
}

/// Reqwest-backed Wger catalog client
pub struct WgerClient {
    config: WgerConfig,
    http_client: Client,
}

impl WgerClient {
    /// Create a client over the given configuration
    pub fn new(config: WgerConfig) -> Self {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl ExerciseCatalog for WgerClient {
    async fn fetch_exercises(&self) -> AppResult<Vec<Exercise>> {
        let url = format!("{}/exercise/", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("language", self.config.language.to_string()),
                ("limit", self.config.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service("Wger API", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Wger API",
                format!("HTTP {}", response.status()),
            ));
        }

        let page: ExercisePage = response
            .json()
            .await
            .map_err(|e| AppError::external_service("Wger API", format!("JSON parse error: {e}")))?;

        let exercises = collect_named(page);
        debug!(count = exercises.len(), "fetched exercise catalog batch");
        Ok(exercises)
    }
}

/// Keep entries that carry a non-blank name, dropping the rest.
fn collect_named(page: ExercisePage) -> Vec<Exercise> {
    page.results
        .into_iter()
        .filter_map(|raw| {
            let name = raw.name.filter(|n| !n.trim().is_empty())?;
            Some(Exercise {
                name,
                description: raw.description.unwrap_or_default(),
            })
        })
        .collect()
}

/// Mock catalog for tests (no network calls)
#[derive(Debug, Default)]
pub struct MockCatalog {
    exercises: Vec<Exercise>,
    fail: bool,
}

impl MockCatalog {
    /// Catalog that returns the given exercises
    pub fn with_exercises(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises,
            fail: false,
        }
    }

    /// Catalog whose fetch always fails
    pub fn failing() -> Self {
        Self {
            exercises: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ExerciseCatalog for MockCatalog {
    async fn fetch_exercises(&self) -> AppResult<Vec<Exercise>> {
        if self.fail {
            return Err(AppError::external_service("Wger API", "mock failure"));
        }
        Ok(self.exercises.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nameless_entries_are_dropped_at_parse() {
        let body = r#"{"results":[{"name":"Squat","description":"x"},{"description":"orphan"},{"name":"  "}]}"#;
        let page: ExercisePage =
            serde_json::from_str(body).unwrap_or(ExercisePage { results: vec![] });
        let kept = collect_named(page);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Squat");
    }

    #[test]
    fn test_default_config_matches_catalog_contract() {
        let config = WgerConfig::default();
        assert_eq!(config.language, 2);
        assert_eq!(config.limit, 200);
        assert!(config.base_url.ends_with("/api/v2"));
    }
}
