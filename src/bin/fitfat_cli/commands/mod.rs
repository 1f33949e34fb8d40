// ABOUTME: CLI command modules
// ABOUTME: client CRUD/list/show, history notes, exercise suggestions, sample seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

pub mod client;
pub mod history;
pub mod seed;
pub mod suggest;

use std::io::{self, BufRead, Write};

use fitfat::errors::{AppError, AppResult};

/// Interactive yes/no prompt guarding destructive actions.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|e| AppError::internal("flushing stdout").with_source(e))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| AppError::internal("reading confirmation").with_source(e))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
