// ABOUTME: External service clients
// ABOUTME: Currently only the Wger public exercise-catalog client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! External service integrations.

pub mod wger;

pub use wger::{Exercise, ExerciseCatalog, MockCatalog, WgerClient, WgerConfig};
