// ABOUTME: Case-insensitive substring search across client fields
// ABOUTME: Pure projection used by the list view; never mutates the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Search/Filter
//!
//! Stateless filter over name, email, phone, and goal. The empty query is the
//! identity projection, so re-rendering after create/update/delete with the
//! active query preserved falls out of one code path.

use crate::models::ClientRecord;

/// Select the subsequence of records whose name, email, phone, or goal
/// contains the query, case-insensitively. Order is preserved.
pub fn filter_clients<'a>(query: &str, clients: &'a [ClientRecord]) -> Vec<&'a ClientRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return clients.iter().collect();
    }
    clients
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.to_lowercase().contains(&needle)
                || c.goal.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
