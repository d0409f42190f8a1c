//! ViewModel layer - derived presentation state shaped for rendering
//!
//! The ViewModel transforms engine state into presentation-ready data
//! (resolved worker names, formatted deadlines, completion flags) that the
//! rendering code consumes - pure data, no business logic.

use chrono::NaiveDateTime;
use td_api_contract::{Language, Worker};

use crate::app::AppState;
use crate::draft::Draft;

/// One task as the list displays it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub assignee: String,
    pub deadline: String,
    pub comment: String,
    pub completed: bool,
    pub editing: bool,
}

/// The active edit session's scratch copy, shaped for the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub task_id: i64,
    pub text_task: String,
    pub comment: String,
    pub worker_id: i64,
    pub assignee: String,
    pub deadline: String,
}

/// ViewModel represents the presentation state derived from the Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub rows: Vec<TaskRow>,
    pub selected_task_index: usize,
    pub draft: Draft,
    pub draft_assignee: String,
    pub workers: Vec<Worker>,
    pub source_language: Language,
    pub target_language: Language,
    pub error_message: Option<String>,
    pub notice: Option<String>,
    pub edit_form: Option<EditForm>,
}

impl ViewModel {
    /// Create a ViewModel from the current AppState
    pub fn from_state(state: &AppState) -> Self {
        let rows = state
            .store
            .tasks()
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                title: task.text_task.clone(),
                assignee: resolve_worker(state, task.worker_id),
                deadline: format_deadline(&task.time),
                comment: task.comment.clone(),
                completed: task.status,
                editing: state.edit.is_editing(task.id),
            })
            .collect();

        let edit_form = state.edit.session().map(|session| EditForm {
            task_id: session.task_id,
            text_task: session.scratch.text_task.clone(),
            comment: session.scratch.comment.clone(),
            worker_id: session.scratch.worker_id,
            assignee: resolve_worker(state, session.scratch.worker_id),
            deadline: session.scratch.time.clone(),
        });

        let draft_assignee = state
            .draft
            .worker_id
            .map(|id| resolve_worker(state, id))
            .unwrap_or_default();

        Self {
            rows,
            selected_task_index: state.selected_task,
            draft: state.draft.clone(),
            draft_assignee,
            workers: state.store.workers().to_vec(),
            source_language: state.source_language,
            target_language: state.target_language,
            error_message: state.error.clone(),
            notice: state.notice.clone(),
            edit_form,
        }
    }

    /// Get the selected row (useful for assertions)
    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.get(self.selected_task_index)
    }
}

fn resolve_worker(state: &AppState, worker_id: i64) -> String {
    state
        .store
        .worker_name(worker_id)
        .unwrap_or("Unknown")
        .to_string()
}

/// Render the `datetime-local` string the way the task cards display it;
/// unparsable values pass through untouched
fn format_deadline(raw: &str) -> String {
    if raw.is_empty() {
        return "no deadline".to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.format("%d %B %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
