//! End-to-end engine flows against the in-memory mock client

use std::sync::Arc;

use td_api_contract::{Language, Task, Worker};
use td_client_mock::MockClient;
use td_tui::draft::TaskField;
use td_tui::model::Model;
use td_tui::msg::Msg;
use td_tui::session::EditState;

fn worker(id: i64, name: &str) -> Worker {
    Worker {
        id,
        name: name.to_string(),
    }
}

fn task(id: i64, text: &str, status: bool) -> Task {
    Task {
        id,
        text_task: text.to_string(),
        comment: String::new(),
        worker_id: 1,
        time: "2025-05-01T12:00".to_string(),
        status,
    }
}

fn seeded_model(tasks: Vec<Task>) -> (Arc<MockClient>, Model<MockClient>) {
    let client = Arc::new(
        MockClient::new()
            .with_workers(vec![worker(1, "Dana"), worker(2, "Marat")])
            .with_tasks(tasks),
    );
    (client.clone(), Model::new(client))
}

#[tokio::test]
async fn incomplete_draft_makes_no_remote_call() {
    let (client, mut model) = seeded_model(vec![]);
    model.load_initial_data().await;

    model
        .update(Msg::DraftField(TaskField::Text("Order parts".to_string())))
        .await;
    // No worker picked yet.
    model.update(Msg::SubmitDraft).await;

    assert_eq!(client.calls().create, 0);
    assert_eq!(
        model.state.error.as_deref(),
        Some("Please fill all required fields")
    );
    // The draft survives for correction.
    assert_eq!(model.state.draft.task_text, "Order parts");
}

#[tokio::test]
async fn successful_create_clears_draft_and_refetches() {
    let (client, mut model) = seeded_model(vec![]);
    model.load_initial_data().await;
    let refetches_before = client.calls().list_tasks;

    model
        .update(Msg::DraftField(TaskField::Text("Order parts".to_string())))
        .await;
    model.update(Msg::DraftField(TaskField::Worker(2))).await;
    model.update(Msg::SubmitDraft).await;

    assert_eq!(client.calls().create, 1);
    assert_eq!(client.calls().list_tasks, refetches_before + 1);
    assert!(model.state.error.is_none());
    assert_eq!(model.state.draft.task_text, "");
    assert_eq!(model.state.draft.worker_id, None);

    // The visible list is the refetched one, not a locally patched value.
    assert_eq!(model.state.store.tasks().len(), 1);
    assert_eq!(model.state.store.tasks()[0].text_task, "Order parts");
}

#[tokio::test]
async fn failed_create_keeps_the_draft() {
    let (client, mut model) = seeded_model(vec![]);
    model.load_initial_data().await;
    client.fail_create(true);

    model
        .update(Msg::DraftField(TaskField::Text("Order parts".to_string())))
        .await;
    model.update(Msg::DraftField(TaskField::Worker(1))).await;
    model.update(Msg::SubmitDraft).await;

    assert_eq!(
        model.state.error.as_deref(),
        Some("Failed to add task. Please check input.")
    );
    assert_eq!(model.state.draft.task_text, "Order parts");
    assert_eq!(model.state.draft.worker_id, Some(1));
    assert!(model.state.store.tasks().is_empty());
}

#[tokio::test]
async fn status_toggle_reflects_the_refetched_state() {
    let (_, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", true)]);
    model.load_initial_data().await;

    model
        .update(Msg::SetStatus {
            id: 1,
            complete: true,
        })
        .await;

    let tasks = model.state.store.tasks();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.status));
}

#[tokio::test]
async fn status_failure_is_silent_and_retryable() {
    let (client, mut model) = seeded_model(vec![task(1, "first", false)]);
    model.load_initial_data().await;
    client.fail_set_status(true);

    model
        .update(Msg::SetStatus {
            id: 1,
            complete: true,
        })
        .await;

    // No banner, cache untouched.
    assert!(model.state.error.is_none());
    assert!(!model.state.store.tasks()[0].status);

    // Re-invoking after the fault clears succeeds.
    client.fail_set_status(false);
    model
        .update(Msg::SetStatus {
            id: 1,
            complete: true,
        })
        .await;
    assert!(model.state.store.tasks()[0].status);
}

#[tokio::test]
async fn delete_refetches_and_failure_is_silent() {
    let (client, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", false)]);
    model.load_initial_data().await;

    client.fail_delete(true);
    model.update(Msg::Remove(1)).await;
    assert_eq!(model.state.store.tasks().len(), 2);
    assert!(model.state.error.is_none());

    client.fail_delete(false);
    model.update(Msg::Remove(1)).await;
    let tasks = model.state.store.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 2);
}

#[tokio::test]
async fn clear_all_empties_the_list() {
    let (_, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", false)]);
    model.load_initial_data().await;

    model.update(Msg::RemoveAll).await;
    assert!(model.state.store.tasks().is_empty());
}

#[tokio::test]
async fn edit_cancel_leaves_the_cache_untouched() {
    let (_, mut model) = seeded_model(vec![task(1, "original", false)]);
    model.load_initial_data().await;
    let before = model.state.store.tasks().to_vec();

    model.update(Msg::StartEdit(1)).await;
    model
        .update(Msg::EditField(TaskField::Text("scribbles".to_string())))
        .await;
    model
        .update(Msg::EditField(TaskField::Comment("more".to_string())))
        .await;
    model.update(Msg::CancelEdit).await;

    assert_eq!(model.state.edit, EditState::Idle);
    assert_eq!(model.state.store.tasks(), before.as_slice());
}

#[tokio::test]
async fn commit_failure_keeps_session_error_and_cache() {
    let (client, mut model) = seeded_model(vec![task(1, "original", false)]);
    model.load_initial_data().await;
    let before = model.state.store.tasks().to_vec();
    client.fail_update(true);

    model.update(Msg::StartEdit(1)).await;
    model
        .update(Msg::EditField(TaskField::Text("rewritten".to_string())))
        .await;
    model.update(Msg::CommitEdit).await;

    assert_eq!(model.state.error.as_deref(), Some("Error saving changes"));
    assert_eq!(model.state.store.tasks(), before.as_slice());

    // Session stays open with the scratch copy intact, ready for retry.
    let session = model.state.edit.session().expect("session still active");
    assert_eq!(session.task_id, 1);
    assert_eq!(session.scratch.text_task, "rewritten");

    // Retry once the remote recovers.
    client.fail_update(false);
    model.update(Msg::CommitEdit).await;
    assert_eq!(model.state.edit, EditState::Idle);
    assert!(model.state.error.is_none());
    assert_eq!(model.state.store.tasks()[0].text_task, "rewritten");
}

#[tokio::test]
async fn second_edit_is_rejected_until_the_first_resolves() {
    let (_, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", false)]);
    model.load_initial_data().await;

    model.update(Msg::StartEdit(1)).await;
    model.update(Msg::StartEdit(2)).await;
    assert!(model.state.edit.is_editing(1));

    model.update(Msg::CancelEdit).await;
    model.update(Msg::StartEdit(2)).await;
    assert!(model.state.edit.is_editing(2));
}

#[tokio::test]
async fn english_pivot_rejection_gets_a_distinct_message() {
    let (client, mut model) = seeded_model(vec![task(1, "Aufgabe", false)]);
    model.load_initial_data().await;
    client.fail_translate_with(
        "Model 'opus-mt-de-ru' not found. Please try translating via English first.",
    );

    model.update(Msg::SourceLanguage(Language::De)).await;
    model.update(Msg::TargetLanguage(Language::Ru)).await;
    model.update(Msg::Translate).await;

    assert_eq!(
        model.state.error.as_deref(),
        Some("Failed to translate tasks. Try translating to English first")
    );
    assert!(model.state.notice.is_none());
}

#[tokio::test]
async fn generic_translation_failure_gets_the_generic_message() {
    let (client, mut model) = seeded_model(vec![task(1, "Aufgabe", false)]);
    model.load_initial_data().await;
    client.fail_translate_with("translation failed");

    model.update(Msg::Translate).await;

    assert_eq!(
        model.state.error.as_deref(),
        Some("Failed to translate tasks")
    );
}

#[tokio::test]
async fn successful_translation_notifies_and_refetches() {
    let (client, mut model) = seeded_model(vec![task(1, "Hello", false)]);
    model.load_initial_data().await;
    let refetches_before = client.calls().list_tasks;

    model.update(Msg::SourceLanguage(Language::En)).await;
    model.update(Msg::TargetLanguage(Language::Ru)).await;
    model.update(Msg::Translate).await;

    assert_eq!(client.calls().translate, 1);
    assert_eq!(client.calls().list_tasks, refetches_before + 1);
    assert_eq!(
        model.state.notice.as_deref(),
        Some("Tasks translated successfully")
    );
    assert!(model.state.error.is_none());
    // The visible text is whatever the refetch returned.
    assert!(model.state.store.tasks()[0].text_task.starts_with("[ru]"));
}

#[tokio::test]
async fn malformed_task_response_resets_the_cache() {
    let (client, mut model) = seeded_model(vec![task(1, "first", false)]);
    model.load_initial_data().await;
    assert_eq!(model.state.store.tasks().len(), 1);

    client.fail_list_tasks(true);
    model.update(Msg::RefreshTasks).await;

    assert!(model.state.store.tasks().is_empty());
    assert_eq!(model.state.error.as_deref(), Some("Failed to load tasks"));
}

#[tokio::test]
async fn worker_load_failure_sets_its_own_error() {
    let client = Arc::new(MockClient::new());
    client.fail_list_workers(true);
    let mut model = Model::new(client);

    model.update(Msg::RefreshWorkers).await;

    assert!(model.state.store.workers().is_empty());
    assert_eq!(model.state.error.as_deref(), Some("Failed to load workers"));
}

#[tokio::test]
async fn deleting_the_edited_task_drops_the_session() {
    let (_, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", false)]);
    model.load_initial_data().await;

    model.update(Msg::StartEdit(1)).await;
    model.update(Msg::Remove(1)).await;

    // The refetch no longer contains the session's target.
    assert_eq!(model.state.edit, EditState::Idle);
}

#[tokio::test]
async fn selection_stays_within_the_list() {
    let (_, mut model) = seeded_model(vec![task(1, "first", false), task(2, "second", false)]);
    model.load_initial_data().await;

    model.update(Msg::SelectNext).await;
    model.update(Msg::SelectNext).await;
    assert_eq!(model.state.selected_task, 1);

    model.update(Msg::Remove(2)).await;
    assert_eq!(model.state.selected_task, 0);

    model.update(Msg::SelectPrevious).await;
    assert_eq!(model.state.selected_task, 0);
}
