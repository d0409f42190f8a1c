//! In-memory ClientApi implementation for engine tests
//!
//! The mock keeps its own task/worker collections, applies mutations to
//! them so a subsequent `list_tasks` behaves like a real refetch, counts
//! calls per endpoint, and supports per-endpoint failure injection. The
//! injected error texts match what the real service emits.

use async_trait::async_trait;
use std::sync::Mutex;
use td_api_contract::*;
use td_client_api::{ClientApi, ClientApiError, ClientApiResult};

/// Per-endpoint call counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub list_tasks: u32,
    pub list_workers: u32,
    pub create: u32,
    pub update: u32,
    pub set_status: u32,
    pub delete: u32,
    pub delete_all: u32,
    pub translate: u32,
}

#[derive(Debug, Default)]
struct MockState {
    tasks: Vec<Task>,
    workers: Vec<Worker>,
    next_id: i64,
    calls: CallCounts,
    fail_list_tasks: bool,
    fail_list_workers: bool,
    fail_create: bool,
    fail_update: bool,
    fail_set_status: bool,
    fail_delete: bool,
    fail_delete_all: bool,
    translate_error: Option<String>,
}

/// Scriptable in-memory stand-in for the remote service
#[derive(Debug, Default)]
pub struct MockClient {
    state: Mutex<MockState>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the worker roster
    pub fn with_workers(self, workers: Vec<Worker>) -> Self {
        self.state.lock().unwrap().workers = workers;
        self
    }

    /// Seed the task collection; `next_id` continues past the highest seeded id
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
            state.tasks = tasks;
        }
        self
    }

    pub fn fail_list_tasks(&self, fail: bool) {
        self.state.lock().unwrap().fail_list_tasks = fail;
    }

    pub fn fail_list_workers(&self, fail: bool) {
        self.state.lock().unwrap().fail_list_workers = fail;
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.state.lock().unwrap().fail_update = fail;
    }

    pub fn fail_set_status(&self, fail: bool) {
        self.state.lock().unwrap().fail_set_status = fail;
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    pub fn fail_delete_all(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete_all = fail;
    }

    /// Make translation fail with the given service error text
    pub fn fail_translate_with(&self, error: impl Into<String>) {
        self.state.lock().unwrap().translate_error = Some(error.into());
    }

    pub fn clear_translate_failure(&self) {
        self.state.lock().unwrap().translate_error = None;
    }

    /// Snapshot of the call counters
    pub fn calls(&self) -> CallCounts {
        self.state.lock().unwrap().calls
    }

    /// Snapshot of the mock's current task collection
    pub fn tasks_snapshot(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }
}

#[async_trait]
impl ClientApi for MockClient {
    async fn list_tasks(&self) -> ClientApiResult<Vec<Task>> {
        let mut state = self.state.lock().unwrap();
        state.calls.list_tasks += 1;
        if state.fail_list_tasks {
            return Err(ClientApiError::Unexpected(
                "unexpected response format: null".to_string(),
            ));
        }
        Ok(state.tasks.clone())
    }

    async fn list_workers(&self) -> ClientApiResult<Vec<Worker>> {
        let mut state = self.state.lock().unwrap();
        state.calls.list_workers += 1;
        if state.fail_list_workers {
            return Err(ClientApiError::Unexpected(
                "unexpected response format: null".to_string(),
            ));
        }
        Ok(state.workers.clone())
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientApiResult<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.create += 1;
        if state.fail_create {
            return Err(ClientApiError::Server("failed to insert task".to_string()));
        }
        state.next_id += 1;
        let task = Task {
            id: state.next_id,
            text_task: request.text_task.clone(),
            comment: request.comment.clone(),
            worker_id: request.worker_id,
            time: request.time.clone(),
            status: false,
        };
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> ClientApiResult<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.update += 1;
        if state.fail_update {
            return Err(ClientApiError::Server("unable to update task".to_string()));
        }
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ClientApiError::Server("unable to update task".to_string()))?;
        task.text_task = request.text_task.clone();
        task.comment = request.comment.clone();
        task.worker_id = request.worker_id;
        task.time = request.time.clone();
        Ok(task.clone())
    }

    async fn set_task_status(
        &self,
        id: i64,
        request: &StatusUpdateRequest,
    ) -> ClientApiResult<Task> {
        let mut state = self.state.lock().unwrap();
        state.calls.set_status += 1;
        if state.fail_set_status {
            return Err(ClientApiError::Server(
                "unable to update task status".to_string(),
            ));
        }
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ClientApiError::Server("unable to update task status".to_string()))?;
        task.status = request.status;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> ClientApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.delete += 1;
        if state.fail_delete {
            return Err(ClientApiError::Server("unable to delete task".to_string()));
        }
        state.tasks.retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_all_tasks(&self) -> ClientApiResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls.delete_all += 1;
        if state.fail_delete_all {
            return Err(ClientApiError::Server(
                "unable to delete all tasks".to_string(),
            ));
        }
        let deleted = state.tasks.len() as u64;
        state.tasks.clear();
        Ok(deleted)
    }

    async fn translate_tasks(&self, request: &TranslateTasksRequest) -> ClientApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.translate += 1;
        if let Some(error) = state.translate_error.clone() {
            return Err(ClientApiError::Server(error));
        }
        // Translation output is the service's concern; the mock only marks
        // the texts so tests can observe that a refetch happened.
        let tag = format!("[{}]", request.target_language.code());
        for task in &mut state.tasks {
            if !task.text_task.starts_with(&tag) {
                task.text_task = format!("{} {}", tag, task.text_task);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: i64, name: &str) -> Worker {
        Worker {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn mutations_show_up_in_the_next_listing() {
        let client = MockClient::new().with_workers(vec![worker(1, "Dana")]);

        let created = client
            .create_task(&CreateTaskRequest {
                text_task: "Write minutes".to_string(),
                comment: String::new(),
                worker_id: 1,
                time: String::new(),
            })
            .await
            .unwrap();

        let listed = client.list_tasks().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        client.delete_task(created.id).await.unwrap();
        assert!(client.list_tasks().await.unwrap().is_empty());
        assert_eq!(client.calls().list_tasks, 2);
    }

    #[tokio::test]
    async fn injected_failures_surface_as_server_errors() {
        let client = MockClient::new();
        client.fail_translate_with("Please try translating via English first");

        let request = TranslateTasksRequest {
            source_language: Language::De,
            target_language: Language::Ru,
        };
        match client.translate_tasks(&request).await {
            Err(ClientApiError::Server(message)) => {
                assert!(message.contains("English first"));
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}
