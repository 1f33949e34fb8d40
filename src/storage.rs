// ABOUTME: Record store for the client list, persisted as one JSON document
// ABOUTME: ClientStore trait plus the JSON-file implementation and an in-memory fake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Record Store
//!
//! The whole client list is owned by the store and persisted as a single
//! document; there is no partial-record update primitive. All mutation is
//! read-whole, modify-in-memory, write-whole.
//!
//! A corrupt or missing persisted value degrades to an empty list (logged,
//! never surfaced to the user), matching the storage-corruption taxonomy.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::models::ClientRecord;

/// Record repository seam: whole-list load and save.
///
/// Controllers take this trait so tests can substitute [`MemoryStore`].
pub trait ClientStore: Send + Sync {
    /// Load the full client list.
    ///
    /// Never fails on bad data: a missing or corrupt persisted value yields
    /// an empty list, with the failure logged as a side effect.
    fn load(&self) -> AppResult<Vec<ClientRecord>>;

    /// Replace the entire persisted list in a single write.
    fn save(&self, clients: &[ClientRecord]) -> AppResult<()>;
}

/// JSON-file-backed store: one file holding the full client array
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file path (created on first save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClientStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<ClientRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed reading client store, treating as empty");
                return Ok(Vec::new());
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(clients) => Ok(clients),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt client store, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, clients: &[ClientRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::storage(format!("creating {}", parent.display())).with_source(e))?;
            }
        }
        let json = serde_json::to_vec_pretty(clients)
            .map_err(|e| AppError::serialization("encoding client list").with_source(e))?;

        // Temp-file + rename keeps the write atomic from the caller's side.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| AppError::storage(format!("writing {}", tmp.display())).with_source(e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| AppError::storage(format!("replacing {}", self.path.display())).with_source(e))?;
        debug!(path = %self.path.display(), count = clients.len(), "client store saved");
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    clients: Mutex<Vec<ClientRecord>>,
}

impl MemoryStore {
    /// Create a store pre-populated with the given records
    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        Self {
            clients: Mutex::new(clients),
        }
    }
}

impl ClientStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<ClientRecord>> {
        self.clients
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::storage("in-memory store lock poisoned"))
    }

    fn save(&self, clients: &[ClientRecord]) -> AppResult<()> {
        self.clients
            .lock()
            .map(|mut guard| *guard = clients.to_vec())
            .map_err(|_| AppError::storage("in-memory store lock poisoned"))
    }
}
