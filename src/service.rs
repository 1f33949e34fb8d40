// ABOUTME: CRUD controller orchestrating create/update/delete/history-append against the store
// ABOUTME: Each operation is one synchronous load-mutate-save turn over the whole client list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Client Service
//!
//! The command interface over the record store. Every mutation validates its
//! input first (no partial save), locates records by id only, and persists
//! the whole list in one write. The id generator and date source are
//! injectable seams so tests run deterministically.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{
    format_history_entry, merge_history, ClientForm, ClientRecord, Goal, IdGenerator,
    UuidIdGenerator,
};
use crate::storage::ClientStore;
use crate::validation::validate;

/// Date seam so tests can pin "today" for history-entry formatting
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date source used in production
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date source for tests
#[derive(Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// CRUD controller over a [`ClientStore`]
pub struct ClientService<S: ClientStore> {
    store: S,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<S: ClientStore> ClientService<S> {
    /// Service with production id generation and wall-clock dates
    pub fn new(store: S) -> Self {
        Self::with_parts(store, Box::new(UuidIdGenerator), Box::new(SystemClock))
    }

    /// Service with injected id and date sources (tests)
    pub fn with_parts(store: S, ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self { store, ids, clock }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Full client list in stored order
    pub fn list(&self) -> AppResult<Vec<ClientRecord>> {
        self.store.load()
    }

    /// Look up one client by id
    pub fn get(&self, id: &str) -> AppResult<Option<ClientRecord>> {
        Ok(self.store.load()?.into_iter().find(|c| c.id == id))
    }

    /// Create a new client from validated form data.
    ///
    /// History starts with one formatted entry when a note was supplied,
    /// otherwise empty. Returns the stored record.
    pub fn create(&self, form: &ClientForm) -> AppResult<ClientRecord> {
        let form = form.trimmed();
        let report = validate(&form);
        if !report.is_valid() {
            return Err(AppError::validation(&report));
        }
        let goal: Goal = form.goal.parse()?;

        let history = if form.history_text.is_empty() {
            Vec::new()
        } else {
            vec![format_history_entry(self.clock.today(), &form.history_text)]
        };
        let record = ClientRecord {
            id: self.ids.generate(),
            name: form.name,
            age: form.age,
            gender: form.gender,
            email: form.email,
            phone: form.phone,
            goal,
            start_date: form.start_date,
            history,
        };

        let mut clients = self.store.load()?;
        clients.push(record.clone());
        self.store.save(&clients)?;
        info!(id = %record.id, "client created");
        Ok(record)
    }

    /// Update an existing client, replacing all scalar fields and merging
    /// history by prepending a new entry when a note was supplied.
    ///
    /// Fails with a not-found error when the id is unknown; the operation is
    /// aborted and retryable.
    pub fn update(&self, id: &str, form: &ClientForm) -> AppResult<ClientRecord> {
        let form = form.trimmed();
        let report = validate(&form);
        if !report.is_valid() {
            return Err(AppError::validation(&report));
        }
        let goal: Goal = form.goal.parse()?;

        let mut clients = self.store.load()?;
        let Some(slot) = clients.iter_mut().find(|c| c.id == id) else {
            warn!(id, "update targeted a missing client");
            return Err(AppError::not_found(format!("Client {id}")));
        };
        slot.name = form.name;
        slot.age = form.age;
        slot.gender = form.gender;
        slot.email = form.email;
        slot.phone = form.phone;
        slot.goal = goal;
        slot.start_date = form.start_date;
        slot.history = merge_history(&slot.history, &form.history_text, self.clock.today());
        let updated = slot.clone();

        self.store.save(&clients)?;
        info!(id = %updated.id, "client updated");
        Ok(updated)
    }

    /// Remove exactly the matching record, preserving the order of the rest.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut clients = self.store.load()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Err(AppError::not_found(format!("Client {id}")));
        }
        self.store.save(&clients)?;
        info!(id, "client deleted");
        Ok(())
    }

    /// Prepend a formatted history entry to one client's record.
    ///
    /// Silently a no-op (returns `Ok(None)`) when the note trims empty or the
    /// id is unknown, matching the detail view's append flow.
    pub fn append_history(&self, id: &str, text: &str) -> AppResult<Option<ClientRecord>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let mut clients = self.store.load()?;
        let Some(slot) = clients.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        slot.history
            .insert(0, format_history_entry(self.clock.today(), text));
        let updated = slot.clone();
        self.store.save(&clients)?;
        info!(id, entries = updated.history.len(), "history entry appended");
        Ok(Some(updated))
    }

    /// Replace the store contents with the given roster (sample seeding).
    ///
    /// The caller is responsible for the destructive-action confirmation.
    pub fn seed(&self, roster: Vec<ClientRecord>) -> AppResult<usize> {
        let count = roster.len();
        self.store.save(&roster)?;
        info!(count, "store seeded with sample roster");
        Ok(count)
    }

    /// The id generator in use (used when building seed rosters)
    pub fn ids(&self) -> &dyn IdGenerator {
        self.ids.as_ref()
    }
}
