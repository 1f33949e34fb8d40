// ABOUTME: Library root for the fitFAT client-management core
// ABOUTME: Wires together storage, validation, CRUD service, search, and exercise suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # fitFAT
//!
//! Client-management core for a small fitness business: client profiles with
//! free-text training history, a single-document local store, field-level
//! validation, case-insensitive search, and goal-ranked exercise suggestions
//! fetched from the public Wger catalog.
//!
//! ## Modules
//!
//! - [`models`]: `ClientRecord`, the [`models::Goal`] enum, id generation
//! - [`storage`]: the [`storage::ClientStore`] trait plus JSON-file and in-memory stores
//! - [`validation`]: per-field validation producing a [`validation::ValidationReport`]
//! - [`service`]: the CRUD controller ([`service::ClientService`])
//! - [`search`]: pure case-insensitive substring filter over client fields
//! - [`suggestions`]: goal-keyword scoring and top-5 selection with random fill
//! - [`external`]: the Wger exercise-catalog client and its mock twin
//! - [`config`]: environment-driven runtime configuration

pub mod config;
pub mod errors;
pub mod external;
pub mod models;
pub mod search;
pub mod seed;
pub mod service;
pub mod storage;
pub mod suggestions;
pub mod validation;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{ClientForm, ClientRecord, Goal};
pub use service::ClientService;
