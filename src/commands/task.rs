//! Task Commands
//!
//! HTTP bindings for the Task API endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{HttpTaskApi, TaskApi};
use crate::error::ApiError;
use crate::models::{CreatedTask, NewTask, Status, Task, TaskId, TaskListResponse};

const TASKS_PATH: &str = "/api/tasks";

// ========================
// Argument Structs
// ========================

/// Create body; `description` is always sent, empty when not given
#[derive(Serialize)]
pub(crate) struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: &'a str,
}

impl<'a> From<&'a NewTask> for CreateTaskArgs<'a> {
    fn from(task: &'a NewTask) -> Self {
        Self {
            title: &task.title,
            description: task.description.as_deref().unwrap_or_default(),
            priority: task.priority.as_str(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct StatusArgs {
    pub status: Status,
}

pub(crate) fn task_path(id: TaskId) -> String {
    format!("{TASKS_PATH}/{id}")
}

pub(crate) fn status_path(id: TaskId) -> String {
    format!("{TASKS_PATH}/{id}/status")
}

// ========================
// Commands
// ========================

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.config.url(TASKS_PATH);
        let response = self.client.get(&url).send().await;
        let body: TaskListResponse = read_json(&url, checked(&url, response)?).await?;
        Ok(body.tasks)
    }

    async fn create_task(&self, task: &NewTask) -> Result<TaskId, ApiError> {
        let url = self.config.url(TASKS_PATH);
        let response = self
            .client
            .post(&url)
            .json(&CreateTaskArgs::from(task))
            .send()
            .await;
        let created: CreatedTask = read_json(&url, checked(&url, response)?).await?;
        Ok(created.id)
    }

    async fn update_task_status(&self, id: TaskId, status: Status) -> Result<(), ApiError> {
        let url = self.config.url(&status_path(id));
        let response = self
            .client
            .patch(&url)
            .json(&StatusArgs { status })
            .send()
            .await;
        checked(&url, response).map(drop)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let url = self.config.url(&task_path(id));
        let response = self.client.delete(&url).send().await;
        checked(&url, response).map(drop)
    }
}

/// Map send failures and non-2xx responses to `ApiError`
fn checked(
    url: &str,
    response: reqwest::Result<reqwest::Response>,
) -> Result<reqwest::Response, ApiError> {
    let response = response.map_err(|e| ApiError::transport(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { url: url.to_string(), status: status.as_u16() });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let body = response.text().await.map_err(|e| ApiError::transport(url, e))?;
    serde_json::from_str(&body).map_err(|e| ApiError::decode(url, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(task_path(3), "/api/tasks/3");
        assert_eq!(status_path(3), "/api/tasks/3/status");
    }

    #[test]
    fn test_create_body_always_has_description() {
        let draft = NewTask::from_form("Title", "", "LOW").unwrap();
        let body = serde_json::to_value(CreateTaskArgs::from(&draft)).unwrap();
        assert_eq!(body, json!({ "title": "Title", "description": "", "priority": "LOW" }));
    }

    #[test]
    fn test_status_body() {
        let body = serde_json::to_value(StatusArgs { status: Status::InProgress }).unwrap();
        assert_eq!(body, json!({ "status": "IN_PROGRESS" }));
    }

    #[test]
    fn test_created_response_ignores_extra_fields() {
        let created: CreatedTask =
            serde_json::from_value(json!({ "id": 12, "message": "Task created" })).unwrap();
        assert_eq!(created.id, 12);
    }
}
