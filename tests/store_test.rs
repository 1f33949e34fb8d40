// ABOUTME: Integration tests for the JSON-file record store
// ABOUTME: Covers round-trip persistence, corruption degrading to empty, and atomic whole-list writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::fs;

use fitfat::storage::{ClientStore, JsonFileStore};
use fitfat::{ClientRecord, Goal};

fn record(id: &str, name: &str, goal: Goal) -> ClientRecord {
    ClientRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        age: "30".to_owned(),
        gender: "Female".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "1234-567-89-01".to_owned(),
        goal,
        start_date: "2025-01-01".to_owned(),
        history: vec!["1/1/2025 - joined".to_owned()],
    }
}

#[test]
fn test_save_then_load_round_trips() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("clients.json"));

    let clients = vec![
        record("c1", "Ann", Goal::WeightLoss),
        record("c2", "Bob", Goal::Flexibility),
        record("c3", "Cid", Goal::Endurance),
    ];
    store.save(&clients).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, clients);
}

#[test]
fn test_missing_file_loads_empty() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.json");
    fs::write(&path, b"{not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_wrong_shape_degrades_to_empty() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.json");
    fs::write(&path, br#"{"id": "not-a-list"}"#).unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("clients.json");
    let store = JsonFileStore::new(&path);

    store.save(&[record("c1", "Ann", Goal::MuscleGain)]).unwrap();
    assert!(path.exists());
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_save_replaces_whole_list() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("clients.json"));

    store
        .save(&[record("c1", "Ann", Goal::WeightLoss), record("c2", "Bob", Goal::Endurance)])
        .unwrap();
    store.save(&[record("c3", "Cid", Goal::Flexibility)]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "c3");
}

#[test]
fn test_persisted_json_uses_store_schema() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.json");
    let store = JsonFileStore::new(&path);

    store.save(&[record("c1", "Ann", Goal::WeightLoss)]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"startDate\""));
    assert!(raw.contains("\"Weight Loss\""));
    assert!(!raw.contains("start_date"));
}
