//! Client API trait for the TaskDeck engine
//!
//! The engine sees the remote task store and translation service only
//! through this trait; the REST client and the in-memory mock both
//! implement it.

use async_trait::async_trait;
use td_api_contract::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientApiError {
    /// The service answered with an error payload; the text is its `error` field
    #[error("server error: {0}")]
    Server(String),
    /// Transport failure or a response that did not match the contract
    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

#[async_trait]
pub trait ClientApi: Send + Sync {
    async fn list_tasks(&self) -> ClientApiResult<Vec<Task>>;
    async fn list_workers(&self) -> ClientApiResult<Vec<Worker>>;

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientApiResult<Task>;
    async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> ClientApiResult<Task>;
    async fn set_task_status(&self, id: i64, request: &StatusUpdateRequest)
        -> ClientApiResult<Task>;
    async fn delete_task(&self, id: i64) -> ClientApiResult<()>;
    async fn delete_all_tasks(&self) -> ClientApiResult<u64>;

    async fn translate_tasks(&self, request: &TranslateTasksRequest) -> ClientApiResult<()>;
}
