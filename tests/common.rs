// ABOUTME: Shared test utilities for fitfat integration tests
// ABOUTME: Provides quiet logging setup, deterministic service builders, and form fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT
#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

//! Shared test utilities for `fitfat`.

use std::sync::Once;

use chrono::NaiveDate;
use fitfat::models::SequentialIdGenerator;
use fitfat::service::{ClientService, FixedClock};
use fitfat::storage::MemoryStore;
use fitfat::{ClientForm, ClientRecord};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// The date every deterministic test service stamps history entries with
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

/// In-memory service with sequential ids and a pinned clock
pub fn test_service() -> ClientService<MemoryStore> {
    test_service_with(Vec::new())
}

/// In-memory service pre-populated with records
pub fn test_service_with(records: Vec<ClientRecord>) -> ClientService<MemoryStore> {
    init_test_logging();
    ClientService::with_parts(
        MemoryStore::with_clients(records),
        Box::new(SequentialIdGenerator::default()),
        Box::new(FixedClock(test_today())),
    )
}

/// A form that passes validation
pub fn valid_form(name: &str) -> ClientForm {
    ClientForm {
        name: name.to_owned(),
        age: "30".to_owned(),
        gender: "Female".to_owned(),
        email: format!("{}@test.com", name.to_lowercase().replace(' ', ".")),
        phone: "1234-567-89-01".to_owned(),
        goal: "Muscle Gain".to_owned(),
        start_date: "2025-01-01".to_owned(),
        history_text: String::new(),
    }
}
