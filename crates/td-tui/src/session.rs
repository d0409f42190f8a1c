//! Exclusive inline-edit session
//!
//! A two-state machine: either no task is being edited, or exactly one is.
//! The session holds a scratch copy of the task's fields, decoupled from
//! the cached task until the engine commits it through the pipeline.

use td_api_contract::{Task, UpdateTaskRequest};

use crate::draft::TaskField;

/// Scratch state for the one task being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: i64,
    pub scratch: UpdateTaskRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(EditSession),
}

impl EditState {
    /// Idle → Editing, snapshotting the task's current field values.
    ///
    /// Starting while another task's session is active is rejected; the
    /// caller must commit or cancel first. Re-entering the session for the
    /// same task is a no-op. Returns whether a session for `task` is active
    /// afterwards.
    pub fn start(&mut self, task: &Task) -> bool {
        match self {
            EditState::Idle => {
                *self = EditState::Editing(EditSession {
                    task_id: task.id,
                    scratch: UpdateTaskRequest {
                        text_task: task.text_task.clone(),
                        comment: task.comment.clone(),
                        worker_id: task.worker_id,
                        time: task.time.clone(),
                    },
                });
                true
            }
            EditState::Editing(session) => session.task_id == task.id,
        }
    }

    /// Mutates the scratch copy only; no-op from Idle
    pub fn edit_field(&mut self, field: TaskField) {
        if let EditState::Editing(session) = self {
            match field {
                TaskField::Text(value) => session.scratch.text_task = value,
                TaskField::Comment(value) => session.scratch.comment = value,
                TaskField::Worker(id) => session.scratch.worker_id = id,
                TaskField::Deadline(value) => session.scratch.time = value,
            }
        }
    }

    /// Editing → Idle unconditionally, discarding the scratch copy
    pub fn cancel(&mut self) {
        *self = EditState::Idle;
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditState::Idle => None,
            EditState::Editing(session) => Some(session),
        }
    }

    pub fn is_editing(&self, task_id: i64) -> bool {
        matches!(self, EditState::Editing(session) if session.task_id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, text: &str) -> Task {
        Task {
            id,
            text_task: text.to_string(),
            comment: "note".to_string(),
            worker_id: 2,
            time: "2025-03-01T10:00".to_string(),
            status: false,
        }
    }

    #[test]
    fn start_snapshots_the_task_fields() {
        let mut edit = EditState::default();
        assert!(edit.start(&task(1, "Refill stock")));

        let session = edit.session().unwrap();
        assert_eq!(session.task_id, 1);
        assert_eq!(session.scratch.text_task, "Refill stock");
        assert_eq!(session.scratch.comment, "note");
    }

    #[test]
    fn second_start_for_another_task_is_rejected() {
        let mut edit = EditState::default();
        assert!(edit.start(&task(1, "first")));
        assert!(!edit.start(&task(2, "second")));

        // The original session is untouched.
        assert!(edit.is_editing(1));
        assert_eq!(edit.session().unwrap().scratch.text_task, "first");

        // Same task is a harmless no-op.
        assert!(edit.start(&task(1, "first")));
    }

    #[test]
    fn edit_field_only_touches_the_scratch_copy() {
        let source = task(1, "original");
        let mut edit = EditState::default();
        edit.start(&source);
        edit.edit_field(TaskField::Text("rewritten".to_string()));
        edit.edit_field(TaskField::Worker(9));

        assert_eq!(source.text_task, "original");
        let scratch = &edit.session().unwrap().scratch;
        assert_eq!(scratch.text_task, "rewritten");
        assert_eq!(scratch.worker_id, 9);
    }

    #[test]
    fn cancel_discards_the_session() {
        let mut edit = EditState::default();
        edit.start(&task(1, "x"));
        edit.cancel();
        assert_eq!(edit, EditState::Idle);

        // Editing from Idle is a no-op rather than a panic.
        edit.edit_field(TaskField::Comment("ignored".to_string()));
        assert_eq!(edit, EditState::Idle);
    }
}
