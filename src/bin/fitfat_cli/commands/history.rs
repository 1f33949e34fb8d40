// ABOUTME: Training-history commands
// ABOUTME: Appends a timestamped note to one client's history, newest-first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

use clap::Subcommand;
use fitfat::errors::AppResult;
use fitfat::service::ClientService;
use fitfat::storage::ClientStore;

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Append a training-history note to a client
    Add {
        /// Client id
        id: String,

        /// Free-text note
        text: String,
    },
}

pub fn run<S: ClientStore>(service: &ClientService<S>, action: HistoryCommand) -> AppResult<()> {
    match action {
        HistoryCommand::Add { id, text } => {
            // Empty text and unknown ids are silent no-ops, matching the
            // detail view's append flow.
            match service.append_history(&id, &text)? {
                Some(client) => {
                    println!("History for {}:", client.name);
                    for entry in &client.history {
                        println!("  - {entry}");
                    }
                }
                None => println!("Nothing to add."),
            }
            Ok(())
        }
    }
}
