//! New-task input buffer

use td_api_contract::CreateTaskRequest;

/// A single field edit, tagged by field
///
/// Used both for draft entry and for edit sessions, instead of dispatching
/// on field-name strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskField {
    Text(String),
    Comment(String),
    Worker(i64),
    Deadline(String),
}

/// Unsaved new-task input; cleared on successful creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub task_text: String,
    pub comment: String,
    pub worker_id: Option<i64>,
    pub time: String,
}

impl Draft {
    pub fn apply(&mut self, field: TaskField) {
        match field {
            TaskField::Text(value) => self.task_text = value,
            TaskField::Comment(value) => self.comment = value,
            TaskField::Worker(id) => self.worker_id = Some(id),
            TaskField::Deadline(value) => self.time = value,
        }
    }

    /// Required fields are the task text and an assignee
    pub fn is_complete(&self) -> bool {
        !self.task_text.trim().is_empty() && self.worker_id.is_some()
    }

    /// Build the create request; `None` until the required fields are present
    pub fn to_request(&self) -> Option<CreateTaskRequest> {
        if !self.is_complete() {
            return None;
        }
        Some(CreateTaskRequest {
            text_task: self.task_text.clone(),
            comment: self.comment.clone(),
            worker_id: self.worker_id?,
            time: self.time.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
