//! Task Sync
//!
//! The four board operations. Each one calls the API and yields a `Mutation`
//! only on success; failures are logged and reported through the `Prompt`
//! and never touch the local list.

use tracing::{debug, error, info};

use crate::commands::TaskApi;
use crate::error::ApiError;
use crate::models::{NewTask, Status, TaskId};
use crate::store::Mutation;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";

/// Blocking user dialogs
pub trait Prompt {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;
    /// Show a notice the user must dismiss
    fn notify(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// User-facing board actions, for notices and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    UpdateStatus,
    Delete,
}

impl Operation {
    pub fn failure_notice(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load tasks. Please refresh the page.",
            Operation::Create => "❌ Failed to create task. Please try again.",
            Operation::UpdateStatus => "❌ Failed to update status.",
            Operation::Delete => "❌ Failed to delete task.",
        }
    }

    pub fn success_notice(self) -> Option<&'static str> {
        match self {
            Operation::Create => Some("✅ Task created successfully!"),
            Operation::Delete => Some("✅ Task deleted successfully"),
            Operation::Load | Operation::UpdateStatus => None,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Operation::Load => "fetching tasks",
            Operation::Create => "creating task",
            Operation::UpdateStatus => "updating status",
            Operation::Delete => "deleting task",
        }
    }
}

fn report(prompt: &impl Prompt, op: Operation, err: &ApiError) {
    error!(
        transport = err.is_transport(),
        status = err.status(),
        "Error {}: {}",
        op.describe(),
        err
    );
    prompt.notify(op.failure_notice());
}

/// List: replace the local list wholesale
pub async fn fetch_tasks(api: &impl TaskApi, prompt: &impl Prompt) -> Option<Mutation> {
    match api.list_tasks().await {
        Ok(tasks) => {
            info!("Loaded {} tasks", tasks.len());
            Some(Mutation::Replace(tasks))
        }
        Err(err) => {
            report(prompt, Operation::Load, &err);
            None
        }
    }
}

/// Create: prepend a local record built from the server id and `created_at`
pub async fn create_task(
    api: &impl TaskApi,
    prompt: &impl Prompt,
    draft: NewTask,
    created_at: String,
) -> Option<Mutation> {
    match api.create_task(&draft).await {
        Ok(id) => {
            info!("Created task {}", id);
            Some(Mutation::Prepend(draft.into_task(id, created_at)))
        }
        Err(err) => {
            report(prompt, Operation::Create, &err);
            None
        }
    }
}

/// Update status of one task
pub async fn update_task_status(
    api: &impl TaskApi,
    prompt: &impl Prompt,
    id: TaskId,
    status: Status,
) -> Option<Mutation> {
    match api.update_task_status(id, status).await {
        Ok(()) => {
            debug!("Task {} moved to {}", id, status);
            Some(Mutation::SetStatus { id, status })
        }
        Err(err) => {
            report(prompt, Operation::UpdateStatus, &err);
            None
        }
    }
}

/// Ask before deleting; must run before anything else touches the board
pub fn confirm_delete(prompt: &impl Prompt, id: TaskId) -> bool {
    let confirmed = prompt.confirm(DELETE_CONFIRMATION);
    if !confirmed {
        debug!("Delete of task {} declined", id);
    }
    confirmed
}

/// Delete a task the user already confirmed
pub async fn delete_task(api: &impl TaskApi, prompt: &impl Prompt, id: TaskId) -> Option<Mutation> {
    match api.delete_task(id).await {
        Ok(()) => {
            info!("Deleted task {}", id);
            Some(Mutation::Remove(id))
        }
        Err(err) => {
            report(prompt, Operation::Delete, &err);
            None
        }
    }
}
