//! The Model layer - domain state and rules (no terminal I/O)
//!
//! This is the state machine core: the task store refresh path, the
//! mutation pipeline, the edit session transitions, and the translation
//! coordinator. Every remote interaction goes through the `ClientApi`
//! trait and is awaited here; failures are mapped to the single
//! user-facing error slot and never propagate as faults.

use std::sync::Arc;

use td_api_contract::{StatusUpdateRequest, TranslateTasksRequest, UpdateTaskRequest};
use td_client_api::{ClientApi, ClientApiError};
use tracing::{debug, warn};

use crate::app::AppState;
use crate::msg::Msg;

/// The Model owns the engine state and processes messages against it
pub struct Model<C: ClientApi> {
    pub state: AppState,
    client: Arc<C>,
}

impl<C: ClientApi> Model<C> {
    /// Create a new model with initial state
    pub fn new(client: Arc<C>) -> Self {
        Self {
            state: AppState::default(),
            client,
        }
    }

    /// Load workers and tasks once at session start
    pub async fn load_initial_data(&mut self) {
        self.refresh_workers().await;
        self.refresh_tasks().await;
    }

    /// Process a single message and update state
    ///
    /// Runs one operation to completion, including its trailing store
    /// refresh, before the caller can feed the next message; the
    /// happens-after ordering of mutation and refetch is structural.
    pub async fn update(&mut self, msg: Msg) {
        // Success notices are transient; any newer intent replaces them.
        self.state.notice = None;

        match msg {
            Msg::RefreshTasks => self.refresh_tasks().await,
            Msg::RefreshWorkers => self.refresh_workers().await,
            Msg::SelectPrevious => self.select_previous(),
            Msg::SelectNext => self.select_next(),
            Msg::DraftField(field) => self.state.draft.apply(field),
            Msg::SubmitDraft => self.submit_draft().await,
            Msg::SetStatus { id, complete } => self.set_status(id, complete).await,
            Msg::Remove(id) => self.remove(id).await,
            Msg::RemoveAll => self.remove_all().await,
            Msg::StartEdit(id) => self.start_editing(id),
            Msg::EditField(field) => self.state.edit.edit_field(field),
            Msg::CommitEdit => self.commit_edit().await,
            Msg::CancelEdit => self.state.edit.cancel(),
            Msg::SourceLanguage(language) => self.state.source_language = language,
            Msg::TargetLanguage(language) => self.state.target_language = language,
            Msg::Translate => self.translate().await,
        }
    }

    /// Wholesale refetch of the task collection
    ///
    /// On failure the cache is reset to empty rather than left stale or
    /// partial; on success the error slot clears and an edit session whose
    /// target no longer exists is dropped.
    pub async fn refresh_tasks(&mut self) {
        match self.client.list_tasks().await {
            Ok(tasks) => {
                self.state.store.replace_tasks(tasks);
                self.state.error = None;
                let stale_edit = self
                    .state
                    .edit
                    .session()
                    .map(|session| session.task_id)
                    .is_some_and(|id| self.state.store.task(id).is_none());
                if stale_edit {
                    self.state.edit.cancel();
                }
                self.clamp_selection();
            }
            Err(err) => {
                warn!(error = %err, "task refresh failed");
                self.state.store.clear_tasks();
                self.state.error = Some("Failed to load tasks".to_string());
                self.clamp_selection();
            }
        }
    }

    /// Wholesale refetch of the worker roster
    pub async fn refresh_workers(&mut self) {
        match self.client.list_workers().await {
            Ok(workers) => {
                self.state.store.replace_workers(workers);
            }
            Err(err) => {
                warn!(error = %err, "worker refresh failed");
                self.state.store.clear_workers();
                self.state.error = Some("Failed to load workers".to_string());
            }
        }
    }

    /// Create flow: local validation, remote create, draft reset, refetch
    pub async fn submit_draft(&mut self) {
        let Some(request) = self.state.draft.to_request() else {
            self.state.error = Some("Please fill all required fields".to_string());
            return;
        };

        match self.client.create_task(&request).await {
            Ok(_) => {
                self.state.draft.clear();
                self.state.error = None;
                self.refresh_tasks().await;
            }
            Err(err) => {
                warn!(error = %err, "task creation rejected");
                self.state.error = Some("Failed to add task. Please check input.".to_string());
            }
        }
    }

    /// Completion toggle; failures are logged and silently retryable since
    /// the cache still shows the last known-good value
    pub async fn set_status(&mut self, id: i64, complete: bool) {
        let request = StatusUpdateRequest { status: complete };
        match self.client.set_task_status(id, &request).await {
            Ok(_) => self.refresh_tasks().await,
            Err(err) => warn!(task = id, error = %err, "status update failed"),
        }
    }

    /// Delete a task; same silent-fail contract as the status toggle
    pub async fn remove(&mut self, id: i64) {
        match self.client.delete_task(id).await {
            Ok(()) => self.refresh_tasks().await,
            Err(err) => warn!(task = id, error = %err, "delete failed"),
        }
    }

    /// Delete every task
    pub async fn remove_all(&mut self) {
        match self.client.delete_all_tasks().await {
            Ok(deleted) => {
                debug!(deleted, "cleared task list");
                self.refresh_tasks().await;
            }
            Err(err) => warn!(error = %err, "clear all failed"),
        }
    }

    /// Full-field update; closes the edit session on success, leaves it
    /// open for retry or cancel on failure
    pub async fn update_task(&mut self, id: i64, request: UpdateTaskRequest) {
        match self.client.update_task(id, &request).await {
            Ok(_) => {
                self.state.edit.cancel();
                self.state.error = None;
                self.refresh_tasks().await;
            }
            Err(err) => {
                warn!(task = id, error = %err, "task update rejected");
                self.state.error = Some("Error saving changes".to_string());
            }
        }
    }

    /// Idle → Editing for a cached task; rejected while another task's
    /// session is active
    pub fn start_editing(&mut self, id: i64) {
        let Some(task) = self.state.store.task(id) else {
            return;
        };
        if !self.state.edit.start(task) {
            debug!(task = id, "edit rejected, another session is active");
        }
    }

    /// Commit the active edit session through the pipeline
    pub async fn commit_edit(&mut self) {
        let Some(session) = self.state.edit.session() else {
            return;
        };
        let id = session.task_id;
        let request = session.scratch.clone();
        self.update_task(id, request).await;
    }

    /// Bulk-translate all tasks between the selected language pair
    ///
    /// Membership in the language set is enforced by the type; equal source
    /// and target is permitted and left to the service.
    pub async fn translate(&mut self) {
        let request = TranslateTasksRequest {
            source_language: self.state.source_language,
            target_language: self.state.target_language,
        };
        match self.client.translate_tasks(&request).await {
            Ok(()) => {
                self.state.error = None;
                self.state.notice = Some("Tasks translated successfully".to_string());
                self.refresh_tasks().await;
            }
            Err(err) => {
                warn!(error = %err, "translation failed");
                self.state.error = Some(translate_error_message(&err));
            }
        }
    }

    fn select_previous(&mut self) {
        self.state.selected_task = self.state.selected_task.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let max = self.state.store.tasks().len().saturating_sub(1);
        if self.state.selected_task < max {
            self.state.selected_task += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let max = self.state.store.tasks().len().saturating_sub(1);
        if self.state.selected_task > max {
            self.state.selected_task = max;
        }
    }
}

/// The service rejects some language pairs until the corpus has passed
/// through English; that failure gets an actionable message instead of
/// the generic one.
fn translate_error_message(err: &ClientApiError) -> String {
    match err {
        ClientApiError::Server(message) if message.contains("English first") => {
            "Failed to translate tasks. Try translating to English first".to_string()
        }
        _ => "Failed to translate tasks".to_string(),
    }
}
