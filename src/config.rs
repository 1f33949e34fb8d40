// ABOUTME: Environment-driven runtime configuration
// ABOUTME: Resolves the store path and Wger catalog settings from FITFAT_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Configuration
//!
//! Environment-only configuration:
//!
//! - `FITFAT_STORE` - path to the JSON store file
//!   (default: `<user data dir>/fitfat/fitfat_clients.json`)
//! - `FITFAT_WGER_URL` - Wger API base URL
//! - `FITFAT_FETCH_LIMIT` - catalog result-count limit
//! - `FITFAT_HTTP_TIMEOUT_SECS` - catalog request timeout

use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::external::WgerConfig;

/// File name of the JSON store
pub const STORE_FILE_NAME: &str = "fitfat_clients.json";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store file
    pub store_path: PathBuf,
    /// Wger catalog client settings
    pub wger: WgerConfig,
}

impl Config {
    /// Resolve configuration from the environment, applying defaults.
    pub fn from_env() -> AppResult<Self> {
        let store_path = match env::var_os("FITFAT_STORE") {
            Some(path) => PathBuf::from(path),
            None => default_store_path(),
        };

        let mut wger = WgerConfig::default();
        if let Ok(url) = env::var("FITFAT_WGER_URL") {
            wger.base_url = url.trim_end_matches('/').to_owned();
        }
        if let Ok(limit) = env::var("FITFAT_FETCH_LIMIT") {
            wger.limit = limit
                .parse()
                .map_err(|_| AppError::config(format!("FITFAT_FETCH_LIMIT is not a number: {limit}")))?;
        }
        if let Ok(timeout) = env::var("FITFAT_HTTP_TIMEOUT_SECS") {
            wger.timeout_secs = timeout.parse().map_err(|_| {
                AppError::config(format!("FITFAT_HTTP_TIMEOUT_SECS is not a number: {timeout}"))
            })?;
        }

        Ok(Self { store_path, wger })
    }
}

/// Default store location under the user data dir, falling back to the
/// working directory when no data dir is available.
fn default_store_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(STORE_FILE_NAME),
        |dir| dir.join("fitfat").join(STORE_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_path_ends_with_store_file() {
        assert_eq!(
            default_store_path().file_name().and_then(|n| n.to_str()),
            Some(STORE_FILE_NAME)
        );
    }
}
