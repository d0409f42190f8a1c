//! Authoritative local cache of tasks and workers
//!
//! The store is refreshed by wholesale refetch after every mutation.
//! Consumers read snapshot slices; the mutation methods are `pub(crate)`
//! so only the engine's pipeline can touch the cached collections, and
//! every write is a whole-value replacement, never a partial update.

use td_api_contract::{Task, Worker};

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    workers: Vec<Worker>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a worker id to its display name
    pub fn worker_name(&self, worker_id: i64) -> Option<&str> {
        self.workers
            .iter()
            .find(|w| w.id == worker_id)
            .map(|w| w.name.as_str())
    }

    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub(crate) fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    pub(crate) fn replace_workers(&mut self, workers: Vec<Worker>) {
        self.workers = workers;
    }

    pub(crate) fn clear_workers(&mut self) {
        self.workers.clear();
    }
}
