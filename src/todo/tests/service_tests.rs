//! Service orchestration tests for todo management.

use std::sync::Arc;

use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Todo, TodoId},
    ports::{MockTodoRepository, TodoRepositoryError},
    services::{TodoService, TodoServiceError},
};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

type TestService = TodoService<InMemoryTodoRepository>;

#[fixture]
fn service() -> TestService {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

// ── Orchestration over the in-memory adapter ───────────────────────

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_identifier_and_persists(service: TestService) {
    let created = service
        .create_todo(Todo::new("Write report", "Quarterly summary"))
        .await
        .expect("create should succeed");

    let id = created.id.expect("created record carries an id");
    let fetched = service
        .todo_by_id(id)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_discards_client_supplied_identifier(service: TestService) {
    let created = service
        .create_todo(Todo::new("Write report", "Quarterly summary").with_id(TodoId::new(99)))
        .await
        .expect("create should succeed");

    assert_eq!(created.id, Some(TodoId::new(1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_created_records_in_identifier_order(service: TestService) {
    service
        .create_todo(Todo::new("First", "One"))
        .await
        .expect("create should succeed");
    service
        .create_todo(Todo::new("Second", "Two"))
        .await
        .expect("create should succeed");

    let todos = service.list_todos().await.expect("listing should succeed");
    let titles: Vec<&str> = todos.iter().map(|todo| todo.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_of_missing_record_reports_the_requested_identifier(service: TestService) {
    let err = service
        .todo_by_id(TodoId::new(42))
        .await
        .expect_err("lookup should fail");

    assert!(matches!(err, TodoServiceError::NotFound(id) if id == TodoId::new(42)));
    assert_eq!(err.to_string(), "Todo with id: 42 not found");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_text_fields_and_keeps_identifier(service: TestService) {
    let created = service
        .create_todo(Todo::new("Draft", "Initial text"))
        .await
        .expect("create should succeed");
    let id = created.id.expect("created record carries an id");

    let updated = service
        .update_todo(id, Todo::new("Final", "Revised text"))
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "Revised text");

    let fetched = service
        .todo_by_id(id)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_record_fails_not_found(service: TestService) {
    let err = service
        .update_todo(TodoId::new(7), Todo::new("Final", "Revised text"))
        .await
        .expect_err("update should fail");

    assert_eq!(err.to_string(), "Todo with id: 7 not found");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_record_from_listing(service: TestService) {
    let created = service
        .create_todo(Todo::new("Ephemeral", "Gone soon"))
        .await
        .expect("create should succeed");
    let id = created.id.expect("created record carries an id");

    service.delete_todo(id).await.expect("delete should succeed");

    let todos = service.list_todos().await.expect("listing should succeed");
    assert!(todos.is_empty());
    let err = service
        .todo_by_id(id)
        .await
        .expect_err("record should be gone");
    assert!(matches!(err, TodoServiceError::NotFound(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_record_fails_not_found(service: TestService) {
    let err = service
        .delete_todo(TodoId::new(13))
        .await
        .expect_err("delete should fail");

    assert_eq!(err.to_string(), "Todo with id: 13 not found");
}

// ── Repository interaction contracts ───────────────────────────────

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_delegates_one_save_with_identifier_stripped() {
    let mut repository = MockTodoRepository::new();
    repository
        .expect_save()
        .withf(|todo| todo.id.is_none() && todo.title == "Ship release")
        .times(1)
        .returning(|todo| Ok(todo.with_id(TodoId::new(1))));
    let service = TodoService::new(Arc::new(repository));

    let created = service
        .create_todo(Todo::new("Ship release", "Tag and publish").with_id(TodoId::new(50)))
        .await
        .expect("create should succeed");
    assert_eq!(created.id, Some(TodoId::new(1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_saves_the_resolved_record_with_replaced_fields() {
    let mut repository = MockTodoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(TodoId::new(2)))
        .times(1)
        .returning(|id| Ok(Some(Todo::new("Old title", "Old description").with_id(id))));
    repository
        .expect_save()
        .withf(|todo| {
            todo.id == Some(TodoId::new(2))
                && todo.title == "New title"
                && todo.description == "New description"
        })
        .times(1)
        .returning(Ok);
    let service = TodoService::new(Arc::new(repository));

    let updated = service
        .update_todo(TodoId::new(2), Todo::new("New title", "New description"))
        .await
        .expect("update should succeed");
    assert_eq!(updated.title, "New title");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_resolves_the_record_before_removing_it() {
    let mut repository = MockTodoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(TodoId::new(4)))
        .times(1)
        .returning(|id| Ok(Some(Todo::new("Ship release", "Tag and publish").with_id(id))));
    repository
        .expect_delete()
        .withf(|todo| todo.id == Some(TodoId::new(4)))
        .times(1)
        .returning(|_| Ok(()));
    let service = TodoService::new(Arc::new(repository));

    service
        .delete_todo(TodoId::new(4))
        .await
        .expect("delete should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_lookup_never_reaches_delete() {
    let mut repository = MockTodoRepository::new();
    repository
        .expect_find_by_id()
        .with(eq(TodoId::new(9)))
        .times(1)
        .returning(|_| Ok(None));
    repository.expect_delete().times(0);
    let service = TodoService::new(Arc::new(repository));

    let err = service
        .delete_todo(TodoId::new(9))
        .await
        .expect_err("delete should fail");
    assert!(matches!(err, TodoServiceError::NotFound(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_service_errors() {
    let mut repository = MockTodoRepository::new();
    repository.expect_find_all().times(1).returning(|| {
        Err(TodoRepositoryError::persistence(std::io::Error::other(
            "disk unplugged",
        )))
    });
    let service = TodoService::new(Arc::new(repository));

    let err = service
        .list_todos()
        .await
        .expect_err("listing should fail");
    assert!(matches!(err, TodoServiceError::Repository(_)));
}
