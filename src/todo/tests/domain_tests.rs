//! Unit tests for todo domain types.

use crate::todo::domain::{Todo, TodoId};
use rstest::rstest;
use serde_json::json;

// ── Identifier behaviour ───────────────────────────────────────────

#[rstest]
fn todo_id_displays_raw_value() {
    assert_eq!(TodoId::new(42).to_string(), "42");
}

#[rstest]
fn todo_id_round_trips_inner_value() {
    assert_eq!(TodoId::from(7).into_inner(), 7);
}

// ── Record construction ────────────────────────────────────────────

#[rstest]
fn new_records_carry_no_identifier() {
    let todo = Todo::new("Write report", "Quarterly summary");
    assert_eq!(todo.id, None);
    assert_eq!(todo.title, "Write report");
    assert_eq!(todo.description, "Quarterly summary");
}

#[rstest]
fn with_id_populates_identifier_and_keeps_fields() {
    let todo = Todo::new("Write report", "Quarterly summary").with_id(TodoId::new(3));
    assert_eq!(todo.id, Some(TodoId::new(3)));
    assert_eq!(todo.title, "Write report");
    assert_eq!(todo.description, "Quarterly summary");
}

// ── Wire shape ─────────────────────────────────────────────────────

#[rstest]
fn unpersisted_record_serializes_null_identifier() {
    let value = serde_json::to_value(Todo::new("Buy milk", "Two litres")).expect("serializes");
    assert_eq!(
        value,
        json!({ "id": null, "title": "Buy milk", "description": "Two litres" })
    );
}

#[rstest]
fn persisted_record_serializes_numeric_identifier() {
    let todo = Todo::new("Buy milk", "Two litres").with_id(TodoId::new(1));
    let value = serde_json::to_value(todo).expect("serializes");
    assert_eq!(
        value,
        json!({ "id": 1, "title": "Buy milk", "description": "Two litres" })
    );
}

#[rstest]
fn body_without_identifier_deserializes_to_unpersisted_record() {
    let todo: Todo = serde_json::from_value(json!({
        "title": "Buy milk",
        "description": "Two litres"
    }))
    .expect("deserializes");
    assert_eq!(todo, Todo::new("Buy milk", "Two litres"));
}

#[rstest]
fn body_with_identifier_deserializes_to_persisted_record() {
    let todo: Todo = serde_json::from_value(json!({
        "id": 9,
        "title": "Buy milk",
        "description": "Two litres"
    }))
    .expect("deserializes");
    assert_eq!(todo.id, Some(TodoId::new(9)));
}
