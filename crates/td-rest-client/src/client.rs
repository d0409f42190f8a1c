//! Main REST API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use td_api_contract::*;
use td_client_api::{ClientApi, ClientApiResult};
use url::Url;

use crate::error::{RestClientError, RestClientResult};

/// REST API client for the TaskDeck service
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    base_url: Url,
}

impl RestClient {
    /// Create a new REST client
    pub fn new(base_url: Url) -> Self {
        let http_client = HttpClient::builder()
            .user_agent("td-tui/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full task collection
    pub async fn get_tasks(&self) -> RestClientResult<Vec<Task>> {
        self.get("/api/task").await
    }

    /// Fetch the worker roster
    pub async fn get_workers(&self) -> RestClientResult<Vec<Worker>> {
        self.get("/api/workers").await
    }

    /// Create a task
    pub async fn post_task(&self, request: &CreateTaskRequest) -> RestClientResult<Task> {
        td_api_contract::validation::validate(request)?;
        self.post("/api/task", request).await
    }

    /// Update every editable field of a task
    pub async fn put_task(&self, id: i64, request: &UpdateTaskRequest) -> RestClientResult<Task> {
        td_api_contract::validation::validate(request)?;
        let url = format!("/api/task/{}", id);
        self.put(&url, request).await
    }

    /// Update only the completion flag of a task
    pub async fn put_task_status(
        &self,
        id: i64,
        request: &StatusUpdateRequest,
    ) -> RestClientResult<Task> {
        let url = format!("/api/task/{}", id);
        self.put(&url, request).await
    }

    /// Delete a single task
    pub async fn remove_task(&self, id: i64) -> RestClientResult<Acknowledgement> {
        let url = format!("/api/task/{}", id);
        self.delete(&url).await
    }

    /// Delete every task
    pub async fn remove_all_tasks(&self) -> RestClientResult<DeletedCount> {
        self.delete("/api/deleteAllTask").await
    }

    /// Bulk-translate all task texts between two languages
    pub async fn post_translate_tasks(
        &self,
        request: &TranslateTasksRequest,
    ) -> RestClientResult<Acknowledgement> {
        self.post("/api/translateTasks", request).await
    }

    // Private helper methods

    async fn get<T: DeserializeOwned>(&self, path: &str) -> RestClientResult<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> RestClientResult<T> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RestClientResult<T> {
        let url = self.base_url.join(path)?;

        let mut request = self.http_client.request(method, url);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> RestClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|_| RestClientError::UnexpectedResponse(text))
        } else {
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(payload) => Err(RestClientError::Server {
                    status,
                    message: payload.error,
                }),
                Err(_) => Err(RestClientError::UnexpectedResponse(text)),
            }
        }
    }
}

#[async_trait]
impl ClientApi for RestClient {
    async fn list_tasks(&self) -> ClientApiResult<Vec<Task>> {
        Ok(self.get_tasks().await?)
    }

    async fn list_workers(&self) -> ClientApiResult<Vec<Worker>> {
        Ok(self.get_workers().await?)
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientApiResult<Task> {
        Ok(self.post_task(request).await?)
    }

    async fn update_task(&self, id: i64, request: &UpdateTaskRequest) -> ClientApiResult<Task> {
        Ok(self.put_task(id, request).await?)
    }

    async fn set_task_status(
        &self,
        id: i64,
        request: &StatusUpdateRequest,
    ) -> ClientApiResult<Task> {
        Ok(self.put_task_status(id, request).await?)
    }

    async fn delete_task(&self, id: i64) -> ClientApiResult<()> {
        self.remove_task(id).await?;
        Ok(())
    }

    async fn delete_all_tasks(&self) -> ClientApiResult<u64> {
        let count = self.remove_all_tasks().await?;
        Ok(count.deleted)
    }

    async fn translate_tasks(&self, request: &TranslateTasksRequest) -> ClientApiResult<()> {
        self.post_translate_tasks(request).await?;
        Ok(())
    }
}
