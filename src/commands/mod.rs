//! Task API Bindings
//!
//! `TaskApi` is the seam between the board and the REST backend;
//! `HttpTaskApi` is the browser implementation.

mod task;

use async_trait::async_trait;

use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::{NewTask, Status, Task, TaskId};

/// The four Task API operations
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// `POST /api/tasks`, returning the server-assigned id
    async fn create_task(&self, task: &NewTask) -> Result<TaskId, ApiError>;

    /// `PATCH /api/tasks/:id/status`
    async fn update_task_status(&self, id: TaskId, status: Status) -> Result<(), ApiError>;

    /// `DELETE /api/tasks/:id`
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}

/// JSON over HTTP via `reqwest` (fetch on wasm32)
#[derive(Clone)]
pub struct HttpTaskApi {
    config: BoardConfig,
    client: reqwest::Client,
}

impl HttpTaskApi {
    pub fn new(config: BoardConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }
}
