// ABOUTME: Core data models for the fitFAT client-management core
// ABOUTME: Defines ClientRecord, the Goal enum, raw form input, and id generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Data Models
//!
//! The client entity and its invariants:
//!
//! - `id` is generated once at creation, never reassigned, and is the sole
//!   key used for lookup, update, and delete.
//! - `history` is newest-first; entries are immutable once created and are
//!   only ever prepended, never edited or removed individually.
//! - JSON field names match the persisted store schema exactly
//!   (`startDate`, goal display strings such as `"Weight Loss"`).

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Enumerated fitness goal, used both as a client attribute and as the key
/// into the suggestion ranker's keyword mapping.
///
/// Serialized with the display strings the store schema uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// Weight loss programs (cardio-leaning suggestions)
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    /// Muscle gain programs (strength-leaning suggestions)
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    /// Flexibility and mobility programs
    Flexibility,
    /// Endurance programs
    Endurance,
    /// General fitness; also the fallback keyword set for unknown goals
    #[serde(rename = "General Fitness")]
    GeneralFitness,
}

impl Goal {
    /// All goals, in the order the intake form lists them
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Flexibility,
        Self::Endurance,
        Self::GeneralFitness,
    ];

    /// Display string, identical to the persisted wire value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Flexibility => "Flexibility",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight loss" => Ok(Self::WeightLoss),
            "muscle gain" => Ok(Self::MuscleGain),
            "flexibility" => Ok(Self::Flexibility),
            "endurance" => Ok(Self::Endurance),
            "general fitness" => Ok(Self::GeneralFitness),
            other => Err(AppError::invalid_input(format!("unknown goal: {other}"))),
        }
    }
}

/// One tracked fitness-program member and their metadata/history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Opaque unique id; generated at creation, never reassigned
    pub id: String,
    /// Client name
    pub name: String,
    /// Free-form age (the intake form does not constrain it)
    #[serde(default)]
    pub age: String,
    /// Free-form gender
    #[serde(default)]
    pub gender: String,
    /// Contact email
    pub email: String,
    /// Contact phone, grouped-digit format `DDDD-DDD-DD-DD`
    pub phone: String,
    /// Fitness goal
    pub goal: Goal,
    /// Membership start date as entered on the intake form
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// Training history, newest-first; each entry is `"<date> - <text>"`
    #[serde(default)]
    pub history: Vec<String>,
}

/// Raw intake-form field values, prior to validation.
///
/// `history_text` is the free-text note entered alongside the form; an empty
/// note yields zero history entries rather than a validation error.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    /// Client name (required)
    pub name: String,
    /// Age (free-form)
    pub age: String,
    /// Gender (free-form)
    pub gender: String,
    /// Email (required, `local@domain.tld` shape)
    pub email: String,
    /// Phone (required, `DDDD-DDD-DD-DD`)
    pub phone: String,
    /// Goal (required, one of [`Goal::ALL`] display strings)
    pub goal: String,
    /// Start date (required, any non-empty value)
    pub start_date: String,
    /// Optional free-text history note
    pub history_text: String,
}

impl ClientForm {
    /// Copy of the form with every field trimmed, applied once before
    /// validation so every downstream check sees canonical values.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            age: self.age.trim().to_owned(),
            gender: self.gender.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            goal: self.goal.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            history_text: self.history_text.trim().to_owned(),
        }
    }
}

/// Render a date in the short form used by history entries (`M/D/YYYY`)
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Render one history entry: short date, separator, trimmed text.
///
/// Callers reject empty/whitespace-only text before formatting.
pub fn format_history_entry(date: NaiveDate, text: &str) -> String {
    format!("{} - {}", format_short_date(date), text.trim())
}

/// Prepend a newly formatted entry onto an existing history sequence.
///
/// Prior entries are never rewritten or removed; an empty note returns the
/// existing history unchanged.
pub fn merge_history(existing: &[String], text: &str, date: NaiveDate) -> Vec<String> {
    let mut merged = existing.to_vec();
    if !text.trim().is_empty() {
        merged.insert(0, format_history_entry(date, text));
    }
    merged
}

/// Id-generation seam so tests can inject determinism.
///
/// Production ids only need to be unique with overwhelming probability;
/// callers must not rely on cryptographic uniqueness.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh client id
    fn generate(&self) -> String;
}

/// UUID-v4-backed id generator used in production
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        format!("c{}", Uuid::new_v4().simple())
    }
}

/// Deterministic id generator for tests: `c1`, `c2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        format!("c{}", self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_round_trips_through_display() {
        for goal in Goal::ALL {
            assert_eq!(goal.as_str().parse::<Goal>().ok(), Some(goal));
        }
    }

    #[test]
    fn test_goal_parse_is_case_insensitive() {
        assert_eq!("weight loss".parse::<Goal>().ok(), Some(Goal::WeightLoss));
        assert!("crossfit".parse::<Goal>().is_err());
    }

    #[test]
    fn test_goal_wire_format_uses_display_strings() {
        let json = serde_json::to_string(&Goal::GeneralFitness).map_err(|e| e.to_string());
        assert_eq!(json, Ok("\"General Fitness\"".to_owned()));
    }

    #[test]
    fn test_record_wire_format_uses_start_date_camel_case() {
        let record = ClientRecord {
            id: "c1".to_owned(),
            name: "Ann".to_owned(),
            age: String::new(),
            gender: String::new(),
            email: "a@b.com".to_owned(),
            phone: "1234-567-89-01".to_owned(),
            goal: Goal::Endurance,
            start_date: "2025-01-01".to_owned(),
            history: vec![],
        };
        let json = serde_json::to_string(&record).unwrap_or_default();
        assert!(json.contains("\"startDate\":\"2025-01-01\""));
        assert!(json.contains("\"goal\":\"Endurance\""));
    }

    #[test]
    fn test_format_history_entry_trims_text() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
        assert_eq!(format_history_entry(date, "  leg day  "), "6/1/2025 - leg day");
    }

    #[test]
    fn test_merge_history_prepends_and_keeps_order() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
        let existing = vec!["A".to_owned()];
        let merged = merge_history(&existing, "B", date);
        assert_eq!(merged, vec!["6/1/2025 - B".to_owned(), "A".to_owned()]);
    }

    #[test]
    fn test_merge_history_ignores_blank_text() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
        let existing = vec!["A".to_owned()];
        assert_eq!(merge_history(&existing, "   ", date), existing);
    }

    #[test]
    fn test_sequential_ids_are_unique() {
        let ids = SequentialIdGenerator::default();
        assert_eq!(ids.generate(), "c1");
        assert_eq!(ids.generate(), "c2");
    }
}
