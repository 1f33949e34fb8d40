// ABOUTME: Exercise suggestion ranker: goal-keyword scoring and top-5 selection
// ABOUTME: Includes snippet rendering helpers and the stale-fetch generation guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT

//! # Exercise Suggestion Ranker
//!
//! Scores a fetched catalog batch against the client's goal keywords and
//! selects up to five exercises:
//!
//! 1. Each candidate scores one point per mapped keyword appearing as a
//!    substring of the lowercase name-plus-description (a keyword counts at
//!    most once regardless of repeats).
//! 2. Candidates sort by descending score; the sort is stable so ties keep
//!    catalog order.
//! 3. Up to five candidates with score > 0 are taken; any remainder is
//!    filled with uniformly random, non-duplicate picks from the full pool
//!    until five are reached or the pool is exhausted.
//!
//! Overlapping fetches are resolved by [`SuggestionSession`]: each fetch is
//! tagged with a monotonic generation number and stale responses are
//! discarded instead of landing last-write-wins.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use tracing::debug;

use crate::errors::AppResult;
use crate::external::{Exercise, ExerciseCatalog};
use crate::models::Goal;

/// Maximum number of suggestions in a selection
pub const SELECTION_SIZE: usize = 5;

/// Snippet length cap, in characters, before the ellipsis
pub const SNIPPET_CHARS: usize = 140;

/// Keywords matched against catalog text for each goal
const WEIGHT_LOSS_KEYWORDS: [&str; 4] = ["cardio", "running", "aerobic", "circuit"];
const MUSCLE_GAIN_KEYWORDS: [&str; 7] = [
    "strength", "bench", "squat", "dumbbell", "barbell", "press", "deadlift",
];
const FLEXIBILITY_KEYWORDS: [&str; 3] = ["stretch", "yoga", "flexibility"];
const ENDURANCE_KEYWORDS: [&str; 4] = ["endurance", "cardio", "running", "cycling"];
const GENERAL_FITNESS_KEYWORDS: [&str; 5] = ["bodyweight", "push", "pull", "squat", "lunge"];

/// Keyword set for a goal
pub const fn keywords_for_goal(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS_KEYWORDS,
        Goal::MuscleGain => &MUSCLE_GAIN_KEYWORDS,
        Goal::Flexibility => &FLEXIBILITY_KEYWORDS,
        Goal::Endurance => &ENDURANCE_KEYWORDS,
        Goal::GeneralFitness => &GENERAL_FITNESS_KEYWORDS,
    }
}

/// Keyword set for a raw goal string; unknown goals fall back to the
/// General Fitness set.
pub fn keywords_for_goal_name(name: &str) -> &'static [&'static str] {
    name.parse::<Goal>()
        .map_or(keywords_for_goal(Goal::GeneralFitness), keywords_for_goal)
}

/// Count how many keywords appear in the lowercase name + description.
/// Each keyword contributes at most one point.
pub fn score_exercise(exercise: &Exercise, keywords: &[&str]) -> usize {
    let text = format!("{} {}", exercise.name, exercise.description).to_lowercase();
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Rank a candidate pool and select up to [`SELECTION_SIZE`] exercises.
///
/// Scored picks come first (descending score, catalog order on ties); the
/// remainder is filled with random non-duplicate picks from the full pool.
pub fn rank_exercises<R: Rng>(
    pool: &[Exercise],
    keywords: &[&str],
    rng: &mut R,
) -> Vec<Exercise> {
    let mut scored: Vec<(usize, usize)> = pool
        .iter()
        .enumerate()
        .map(|(idx, ex)| (idx, score_exercise(ex, keywords)))
        .collect();
    // Stable sort: ties keep catalog order for determinism.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut picked: Vec<usize> = scored
        .iter()
        .copied()
        .filter(|&(_, score)| score > 0)
        .take(SELECTION_SIZE)
        .map(|(idx, _)| idx)
        .collect();

    if picked.len() < SELECTION_SIZE {
        let mut used: HashSet<usize> = picked.iter().copied().collect();
        while picked.len() < SELECTION_SIZE && used.len() < pool.len() {
            let idx = rng.gen_range(0..pool.len());
            if used.insert(idx) {
                picked.push(idx);
            }
        }
    }

    debug!(
        pool = pool.len(),
        selected = picked.len(),
        "ranked exercise candidates"
    );
    picked.into_iter().map(|idx| pool[idx].clone()).collect()
}

/// Fetch one catalog batch and rank it against the client's goal.
pub async fn suggest_for_goal<C, R>(
    catalog: &C,
    goal: Goal,
    rng: &mut R,
) -> AppResult<Vec<Exercise>>
where
    C: ExerciseCatalog + ?Sized,
    R: Rng,
{
    let pool = catalog.fetch_exercises().await?;
    Ok(rank_exercises(&pool, keywords_for_goal(goal), rng))
}

/// Strip `<...>` markup from catalog description text.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Render a description as a markup-free snippet capped at
/// [`SNIPPET_CHARS`] characters, with an ellipsis when truncated.
pub fn snippet(description: &str) -> String {
    let plain = strip_markup(description);
    let trimmed = plain.trim();
    if trimmed.chars().count() <= SNIPPET_CHARS {
        trimmed.to_owned()
    } else {
        let mut capped: String = trimmed.chars().take(SNIPPET_CHARS).collect();
        capped.push_str("...");
        capped
    }
}

/// Monotonic request-generation counter resolving overlapping fetches.
///
/// `begin` tags a new fetch; `accept` is true only for the most recent tag,
/// so a superseded in-flight response is discarded rather than landing in
/// whatever order the transport delivers it.
#[derive(Debug, Default)]
pub struct SuggestionSession {
    current: AtomicU64,
}

impl SuggestionSession {
    /// Start a new fetch, superseding any in-flight one
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response tagged with `generation` is still current
    pub fn accept(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}
