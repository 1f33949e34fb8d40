// ABOUTME: Sample-roster seeding command
// ABOUTME: Replaces the store with ten bundled sample clients, guarded by a confirmation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

use fitfat::errors::AppResult;
use fitfat::seed::sample_clients;
use fitfat::service::ClientService;
use fitfat::storage::ClientStore;

use super::confirm;

pub fn run<S: ClientStore>(service: &ClientService<S>, yes: bool) -> AppResult<()> {
    if !service.list()?.is_empty()
        && !yes
        && !confirm("There are existing clients - overwrite with sample data?")?
    {
        println!("Aborted.");
        return Ok(());
    }
    let count = service.seed(sample_clients(service.ids()))?;
    println!("Seeded {count} sample clients.");
    Ok(())
}
