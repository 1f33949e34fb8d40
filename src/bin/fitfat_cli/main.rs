// ABOUTME: fitFAT CLI - command-line tool for managing fitness clients and suggestions
// ABOUTME: Handles client CRUD, search, history notes, sample seeding, and exercise suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT
//!
//! Usage:
//! ```bash
//! # Add a client
//! fitfat-cli client add --name "Mike Morgan" --email mike@test.com \
//!     --phone 8888-555-77-01 --goal "Weight Loss" --start-date 2025-02-15
//!
//! # List clients, optionally filtered
//! fitfat-cli client list
//! fitfat-cli client list muscle
//!
//! # Show one client with goal-ranked exercise suggestions
//! fitfat-cli client show <id>
//!
//! # Append a training-history note
//! fitfat-cli history add <id> "5x5 squats, new PR"
//!
//! # Seed the sample roster
//! fitfat-cli seed --yes
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fitfat::config::Config;
use fitfat::errors::AppResult;
use fitfat::external::WgerClient;
use fitfat::service::ClientService;
use fitfat::storage::JsonFileStore;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitfat-cli",
    about = "fitFAT client management CLI",
    long_about = "Command-line tool for managing fitness clients, training history, and goal-ranked exercise suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file override
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Wger API base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Client management commands
    Client {
        #[command(subcommand)]
        action: commands::client::ClientCommand,
    },

    /// Training-history commands
    History {
        #[command(subcommand)]
        action: commands::history::HistoryCommand,
    },

    /// Fetch goal-ranked exercise suggestions for a client
    Suggest {
        /// Client id
        id: String,
    },

    /// Replace the store with the bundled sample roster
    Seed {
        /// Skip the overwrite confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        for (field, message) in &err.fields {
            eprintln!("  {field}: {message}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = Config::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(base_url) = cli.base_url {
        config.wger.base_url = base_url.trim_end_matches('/').to_owned();
    }
    debug!(store = %config.store_path.display(), "configuration resolved");

    let service = ClientService::new(JsonFileStore::new(&config.store_path));

    match cli.command {
        Command::Client { action } => {
            commands::client::run(&service, &config, action).await?;
        }
        Command::History { action } => {
            commands::history::run(&service, action)?;
        }
        Command::Suggest { id } => {
            let catalog = WgerClient::new(config.wger.clone());
            commands::suggest::run(&service, &catalog, &id).await?;
        }
        Command::Seed { yes } => {
            commands::seed::run(&service, yes)?;
        }
    }

    Ok(())
}
