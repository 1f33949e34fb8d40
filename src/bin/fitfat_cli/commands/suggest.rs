// ABOUTME: Exercise-suggestion command and rendering
// ABOUTME: Fetches a catalog batch, ranks it against the client's goal, renders top five
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

use fitfat::errors::{AppError, AppResult};
use fitfat::external::ExerciseCatalog;
use fitfat::models::ClientRecord;
use fitfat::service::ClientService;
use fitfat::storage::ClientStore;
use fitfat::suggestions::{snippet, suggest_for_goal, SuggestionSession};
use tracing::warn;

pub async fn run<S: ClientStore, C: ExerciseCatalog>(
    service: &ClientService<S>,
    catalog: &C,
    id: &str,
) -> AppResult<()> {
    let client = service
        .get(id)?
        .ok_or_else(|| AppError::not_found(format!("Client {id}")))?;
    render_suggestions(catalog, &client).await;
    Ok(())
}

/// Fetch and render suggestions for one client. Fetch failures stay local to
/// this region: they render an inline message and never propagate.
pub async fn render_suggestions<C: ExerciseCatalog>(catalog: &C, client: &ClientRecord) {
    println!("Suggested exercises for goal \"{}\":", client.goal);

    let session = SuggestionSession::default();
    let generation = session.begin();
    match suggest_for_goal(catalog, client.goal, &mut rand::thread_rng()).await {
        Ok(exercises) if session.accept(generation) => {
            if exercises.is_empty() {
                println!("  No exercises available.");
                return;
            }
            for exercise in exercises {
                let summary = snippet(&exercise.description);
                if summary.is_empty() {
                    println!("  - {}", exercise.name);
                } else {
                    println!("  - {} — {summary}", exercise.name);
                }
            }
        }
        Ok(_) => warn!("discarding superseded suggestion fetch"),
        Err(err) => {
            warn!(error = %err, "exercise suggestion fetch failed");
            println!("  Failed to load exercises (network error).");
        }
    }
}
