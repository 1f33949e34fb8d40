// ABOUTME: Client CRUD commands: add, update, delete, list, show
// ABOUTME: list renders the search-filtered table; show renders the detail view with suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

use clap::{Args, Subcommand};
use fitfat::config::Config;
use fitfat::errors::{AppError, AppResult};
use fitfat::external::WgerClient;
use fitfat::models::{ClientForm, ClientRecord};
use fitfat::search::filter_clients;
use fitfat::service::ClientService;
use fitfat::storage::ClientStore;

use super::{confirm, suggest};

/// Intake-form fields shared by `add` and `update`
#[derive(Args, Debug)]
pub struct FormArgs {
    /// Client name
    #[arg(long)]
    pub name: Option<String>,

    /// Age (free-form)
    #[arg(long)]
    pub age: Option<String>,

    /// Gender (free-form)
    #[arg(long)]
    pub gender: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone, format DDDD-DDD-DD-DD
    #[arg(long)]
    pub phone: Option<String>,

    /// Fitness goal (Weight Loss, Muscle Gain, Flexibility, Endurance, General Fitness)
    #[arg(long)]
    pub goal: Option<String>,

    /// Membership start date
    #[arg(long)]
    pub start_date: Option<String>,

    /// Optional training-history note
    #[arg(long)]
    pub history: Option<String>,
}

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Add a new client
    Add {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Update an existing client (omitted flags keep current values)
    Update {
        /// Client id
        id: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Delete a client
    Delete {
        /// Client id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Re-render the list with this search query after deleting
        #[arg(long)]
        query: Option<String>,
    },

    /// List clients, optionally filtered by a search query
    List {
        /// Case-insensitive query matched against name, email, phone, goal
        query: Option<String>,
    },

    /// Show one client's profile, history, and exercise suggestions
    Show {
        /// Client id
        id: String,

        /// Skip the exercise-suggestion fetch
        #[arg(long)]
        no_suggest: bool,
    },
}

pub async fn run<S: ClientStore>(
    service: &ClientService<S>,
    config: &Config,
    action: ClientCommand,
) -> AppResult<()> {
    match action {
        ClientCommand::Add { form } => add(service, form),
        ClientCommand::Update { id, form } => update(service, &id, form),
        ClientCommand::Delete { id, yes, query } => delete(service, &id, yes, query.as_deref()),
        ClientCommand::List { query } => list(service, query.as_deref().unwrap_or_default()),
        ClientCommand::Show { id, no_suggest } => {
            show(service, config, &id, no_suggest).await
        }
    }
}

fn add<S: ClientStore>(service: &ClientService<S>, form: FormArgs) -> AppResult<()> {
    let form = ClientForm {
        name: form.name.unwrap_or_default(),
        age: form.age.unwrap_or_default(),
        gender: form.gender.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        phone: form.phone.unwrap_or_default(),
        goal: form.goal.unwrap_or_default(),
        start_date: form.start_date.unwrap_or_default(),
        history_text: form.history.unwrap_or_default(),
    };
    let record = service.create(&form)?;
    println!("Added client {} ({})", record.name, record.id);
    Ok(())
}

fn update<S: ClientStore>(service: &ClientService<S>, id: &str, form: FormArgs) -> AppResult<()> {
    // Pre-populate from the existing record so omitted flags keep their values,
    // the same way the edit form loads current data.
    let current = service
        .get(id)?
        .ok_or_else(|| AppError::not_found(format!("Client {id}")))?;
    let form = ClientForm {
        name: form.name.unwrap_or(current.name),
        age: form.age.unwrap_or(current.age),
        gender: form.gender.unwrap_or(current.gender),
        email: form.email.unwrap_or(current.email),
        phone: form.phone.unwrap_or(current.phone),
        goal: form.goal.unwrap_or_else(|| current.goal.as_str().to_owned()),
        start_date: form.start_date.unwrap_or(current.start_date),
        history_text: form.history.unwrap_or_default(),
    };
    let record = service.update(id, &form)?;
    println!("Saved changes to {} ({})", record.name, record.id);
    Ok(())
}

fn delete<S: ClientStore>(
    service: &ClientService<S>,
    id: &str,
    yes: bool,
    query: Option<&str>,
) -> AppResult<()> {
    if !yes && !confirm("Delete this client? This cannot be undone.")? {
        println!("Aborted.");
        return Ok(());
    }
    service.delete(id)?;
    println!("Client {id} deleted.");
    // Re-render the list view, preserving the active search query.
    list(service, query.unwrap_or_default())
}

fn list<S: ClientStore>(service: &ClientService<S>, query: &str) -> AppResult<()> {
    let clients = service.list()?;
    let filtered = filter_clients(query, &clients);
    if filtered.is_empty() {
        println!("No clients found. Add one with `client add` or run `seed` for sample data.");
        return Ok(());
    }
    println!(
        "{:<10} {:<20} {:<28} {:<15} {:<16} {:<10}",
        "ID", "Name", "Email", "Phone", "Goal", "Start Date"
    );
    for c in filtered {
        println!(
            "{:<10} {:<20} {:<28} {:<15} {:<16} {:<10}",
            c.id, c.name, c.email, c.phone, c.goal, c.start_date
        );
    }
    Ok(())
}

async fn show<S: ClientStore>(
    service: &ClientService<S>,
    config: &Config,
    id: &str,
    no_suggest: bool,
) -> AppResult<()> {
    let Some(client) = service.get(id)? else {
        println!("Client not found.");
        return Ok(());
    };
    render_details(&client);

    if !no_suggest {
        let catalog = WgerClient::new(config.wger.clone());
        suggest::render_suggestions(&catalog, &client).await;
    }
    Ok(())
}

fn render_details(client: &ClientRecord) {
    println!("{}", client.name);
    println!("  Email:            {}", client.email);
    println!("  Phone:            {}", client.phone);
    println!("  Age:              {}", client.age);
    println!("  Gender:           {}", client.gender);
    println!("  Goal:             {}", client.goal);
    println!("  Membership Start: {}", client.start_date);
    println!("Training history:");
    if client.history.is_empty() {
        println!("  (none)");
    } else {
        for entry in &client.history {
            println!("  - {entry}");
        }
    }
}
