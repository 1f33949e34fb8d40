// ABOUTME: Integration tests for the client CRUD service
// ABOUTME: Covers create, update merge semantics, delete, history append, and sample seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitFAT
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use common::{test_service, test_service_with, valid_form};
use fitfat::seed::sample_clients;
use fitfat::{ErrorCode, Goal};

#[test]
fn test_create_without_note_has_empty_history() {
    let service = test_service();
    let record = service.create(&valid_form("Ann")).unwrap();

    assert_eq!(record.id, "c1");
    assert_eq!(record.goal, Goal::MuscleGain);
    assert!(record.history.is_empty());
    assert_eq!(service.list().unwrap(), vec![record]);
}

#[test]
fn test_create_with_note_formats_one_entry() {
    let service = test_service();
    let mut form = valid_form("Ann");
    form.history_text = "  first session  ".to_owned();

    let record = service.create(&form).unwrap();
    assert_eq!(record.history, vec!["6/1/2025 - first session".to_owned()]);
}

#[test]
fn test_create_rejects_invalid_form_without_saving() {
    let service = test_service();
    let mut form = valid_form("Ann");
    form.name = String::new();

    let err = service.create(&form).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.fields.get("name").map(String::as_str), Some("Name is required"));
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn test_create_assigns_unique_ids() {
    let service = test_service();
    let a = service.create(&valid_form("Ann")).unwrap();
    let b = service.create(&valid_form("Bob")).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_update_merges_history_by_prepending() {
    let service = test_service();
    let mut form = valid_form("Ann");
    form.history_text = "A".to_owned();
    let created = service.create(&form).unwrap();
    let first_entry = created.history[0].clone();

    let mut edit = valid_form("Ann");
    edit.history_text = "B".to_owned();
    let updated = service.update(&created.id, &edit).unwrap();

    assert_eq!(
        updated.history,
        vec!["6/1/2025 - B".to_owned(), first_entry]
    );
}

#[test]
fn test_update_replaces_scalar_fields_and_keeps_id() {
    let service = test_service();
    let created = service.create(&valid_form("Ann")).unwrap();

    let mut edit = valid_form("Ann Updated");
    edit.goal = "Endurance".to_owned();
    edit.phone = "9999-888-77-66".to_owned();
    let updated = service.update(&created.id, &edit).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ann Updated");
    assert_eq!(updated.goal, Goal::Endurance);
    assert_eq!(updated.phone, "9999-888-77-66");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let service = test_service();
    let err = service.update("c404", &valid_form("Ann")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_update_without_note_leaves_history_untouched() {
    let service = test_service();
    let mut form = valid_form("Ann");
    form.history_text = "A".to_owned();
    let created = service.create(&form).unwrap();

    let updated = service.update(&created.id, &valid_form("Ann")).unwrap();
    assert_eq!(updated.history, created.history);
}

#[test]
fn test_delete_removes_exactly_one_and_keeps_order() {
    let service = test_service();
    let a = service.create(&valid_form("Ann")).unwrap();
    let b = service.create(&valid_form("Bob")).unwrap();
    let c = service.create(&valid_form("Cid")).unwrap();

    service.delete(&b.id).unwrap();

    let remaining = service.list().unwrap();
    assert_eq!(
        remaining.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec![a.id.as_str(), c.id.as_str()]
    );
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let service = test_service();
    let err = service.delete("c404").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_append_history_prepends() {
    let service = test_service();
    let mut form = valid_form("Ann");
    form.history_text = "A".to_owned();
    let created = service.create(&form).unwrap();

    let updated = service.append_history(&created.id, "B").unwrap().unwrap();
    assert_eq!(updated.history[0], "6/1/2025 - B");
    assert_eq!(updated.history.len(), 2);
}

#[test]
fn test_append_history_blank_text_is_silent_noop() {
    let service = test_service();
    let created = service.create(&valid_form("Ann")).unwrap();

    assert!(service.append_history(&created.id, "   ").unwrap().is_none());
    assert!(service.get(&created.id).unwrap().unwrap().history.is_empty());
}

#[test]
fn test_append_history_unknown_id_is_silent_noop() {
    let service = test_service();
    assert!(service.append_history("c404", "note").unwrap().is_none());
}

#[test]
fn test_get_returns_none_for_unknown_id() {
    let service = test_service();
    assert!(service.get("c404").unwrap().is_none());
}

#[test]
fn test_seed_replaces_existing_contents() {
    let service = test_service();
    service.create(&valid_form("Ann")).unwrap();

    let count = service.seed(sample_clients(service.ids())).unwrap();
    assert_eq!(count, 10);

    let clients = service.list().unwrap();
    assert_eq!(clients.len(), 10);
    assert!(clients.iter().all(|c| !c.id.is_empty()));
    assert!(clients.iter().any(|c| c.goal == Goal::Flexibility));
}

#[test]
fn test_service_over_prepopulated_store() {
    let roster = sample_clients(&fitfat::models::SequentialIdGenerator::default());
    let service = test_service_with(roster);
    assert_eq!(service.list().unwrap().len(), 10);
    assert_eq!(service.get("c1").unwrap().map(|c| c.name), Some("Mike Morgan".to_owned()));
}
