// ABOUTME: Field-level validation for the client intake form
// ABOUTME: Produces per-field error messages and an overall accept/reject verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Validation Engine
//!
//! Every rule is evaluated independently (no short-circuit), so a rejected
//! form reports all failing fields at once. For the phone field, a malformed
//! value overwrites the plain "required" message: once content is present the
//! most specific failure wins.
//!
//! Age, gender, and the history note are deliberately unvalidated.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{ClientForm, Goal};

/// Validated intake-form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// Client name
    Name,
    /// Contact email
    Email,
    /// Contact phone
    Phone,
    /// Fitness goal
    Goal,
    /// Membership start date
    StartDate,
}

impl Field {
    /// Stable lowercase field key, matching the form input names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Goal => "goal",
            Self::StartDate => "start-date",
        }
    }
}

/// Verdict plus per-field error messages; empty when the form is acceptable
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure for a field, replacing any earlier message for it
    pub fn reject(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// The message recorded for a field, if any
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All recorded per-field messages
    pub const fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }
}

/// Validate a trimmed intake form, reporting every failing field.
pub fn validate(form: &ClientForm) -> ValidationReport {
    let mut report = ValidationReport::default();

    if form.name.is_empty() {
        report.reject(Field::Name, "Name is required");
    }
    if form.email.is_empty() || !is_valid_email(&form.email) {
        report.reject(Field::Email, "Valid email required");
    }
    if form.phone.is_empty() {
        report.reject(Field::Phone, "Phone is required");
    }
    // Malformed overwrites missing once content is present.
    if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
        report.reject(
            Field::Phone,
            "Phone must match xxxx-xxx-xx-xx (digits only)",
        );
    }
    if form.goal.is_empty() || form.goal.parse::<Goal>().is_err() {
        report.reject(Field::Goal, "Please choose a fitness goal");
    }
    if form.start_date.is_empty() {
        report.reject(Field::StartDate, "Start date required");
    }

    if !report.is_valid() {
        debug!(failed_fields = report.errors.len(), "intake form rejected");
    }
    report
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a `.`
/// strictly inside the domain part.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// Fixed grouped-digit pattern `DDDD-DDD-DD-DD` (4-3-2-2, hyphen-separated).
fn is_valid_phone(phone: &str) -> bool {
    let groups: Vec<&str> = phone.split('-').collect();
    groups.len() == 4
        && groups
            .iter()
            .zip([4_usize, 3, 2, 2])
            .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_digit()))
}
