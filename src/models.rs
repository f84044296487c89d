//! Frontend Models
//!
//! Data structures matching the Task API payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

pub type TaskId = u32;

/// Task record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub created_at: String,
}

impl Task {
    /// Description, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Board column a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Column order, left to right
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn column_index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority. Values the server sends beyond the known three are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Options offered by the form and the filter control
    pub const CHOICES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::Other(s) => s,
        }
    }

    /// Badge class, keyed by lowercase priority name
    pub fn badge_class(&self) -> String {
        format!("priority-{}", self.as_str().to_lowercase())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::from(value.to_string())
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority filter applied before partitioning into columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Priority(Priority),
}

impl Filter {
    pub const ALL_VALUE: &'static str = "ALL";

    /// Parse the value of the filter `<select>`
    pub fn from_control_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            Filter::All
        } else {
            Filter::Priority(Priority::from(value))
        }
    }

    pub fn control_value(&self) -> &str {
        match self {
            Filter::All => Self::ALL_VALUE,
            Filter::Priority(p) => p.as_str(),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Priority(p) => &task.priority == p,
        }
    }
}

/// Validated new-task form payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
}

impl NewTask {
    /// Build from raw form input; title and description are trimmed
    pub fn from_form(title: &str, description: &str, priority: &str) -> Result<Self, FormError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let description = description.trim();
        let priority = if priority.is_empty() {
            Priority::default()
        } else {
            Priority::from(priority)
        };
        Ok(Self {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority,
        })
    }

    /// Full local record for a task the server accepted
    pub fn into_task(self, id: TaskId, created_at: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: Status::Todo,
            created_at,
        }
    }
}

// ========================
// Wire Payloads
// ========================

/// `GET /api/tasks` response
#[derive(Debug, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// `POST /api/tasks` response; only `id` is required
#[derive(Debug, Deserialize)]
pub struct CreatedTask {
    pub id: TaskId,
}
