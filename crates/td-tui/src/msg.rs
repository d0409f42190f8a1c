//! Messages that drive the engine state machine
//!
//! All user intents are funneled into these typed messages and consumed
//! by the Model's update(msg) method.

use td_api_contract::Language;

use crate::draft::TaskField;

/// Messages that can be sent to the engine state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Refetch the task collection from the remote store
    RefreshTasks,
    /// Refetch the worker roster from the remote store
    RefreshWorkers,
    /// Move the task selection up
    SelectPrevious,
    /// Move the task selection down
    SelectNext,
    /// Change one field of the new-task draft
    DraftField(TaskField),
    /// Submit the new-task draft
    SubmitDraft,
    /// Mark a task complete or reopen it
    SetStatus { id: i64, complete: bool },
    /// Delete a single task
    Remove(i64),
    /// Delete every task
    RemoveAll,
    /// Begin editing a task inline
    StartEdit(i64),
    /// Change one field of the active edit session's scratch copy
    EditField(TaskField),
    /// Save the active edit session to the remote store
    CommitEdit,
    /// Discard the active edit session
    CancelEdit,
    /// Pick the translation source language
    SourceLanguage(Language),
    /// Pick the translation target language
    TargetLanguage(Language),
    /// Bulk-translate all tasks between the selected languages
    Translate,
}
