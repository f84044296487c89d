//! Board View Model
//!
//! Pure render step: (tasks, filter) -> three columns of card descriptions.
//! Components map this onto the DOM.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::models::{Filter, Status, Task, TaskId};

pub const EMPTY_COLUMN_TEXT: &str = "No tasks yet";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub columns: [ColumnView; 3],
}

impl BoardView {
    pub fn column(&self, status: Status) -> &ColumnView {
        &self.columns[status.column_index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub status: Status,
    pub count: usize,
    pub cards: Vec<CardView>,
}

impl ColumnView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: TaskId,
    pub title: String,
    pub priority: String,
    pub priority_class: String,
    pub description: Option<String>,
    pub created: String,
    pub transitions: [Transition; 2],
}

/// A status-change control on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: Status,
    pub forward: bool,
}

impl Transition {
    /// Controls offered from `current`: every other status, in column order
    pub fn from_status(current: Status) -> [Transition; 2] {
        let to = |target: Status| Transition {
            target,
            forward: target.column_index() > current.column_index(),
        };
        match current {
            Status::Todo => [to(Status::InProgress), to(Status::Done)],
            Status::InProgress => [to(Status::Todo), to(Status::Done)],
            Status::Done => [to(Status::Todo), to(Status::InProgress)],
        }
    }

    pub fn label(&self) -> String {
        let arrow = if self.forward { "→" } else { "←" };
        format!("{} {}", arrow, self.target.label())
    }

    pub fn button_class(&self) -> &'static str {
        match self.target {
            Status::Todo => "btn btn-warning btn-sm",
            Status::InProgress => "btn btn-primary btn-sm",
            Status::Done => "btn btn-success btn-sm",
        }
    }
}

/// Build the full board view
pub fn render_board(tasks: &[Task], filter: &Filter) -> BoardView {
    let columns = Status::ALL.map(|status| {
        let cards: Vec<CardView> = tasks
            .iter()
            .filter(|t| filter.matches(t) && t.status == status)
            .map(card_view)
            .collect();
        ColumnView { status, count: cards.len(), cards }
    });
    BoardView { columns }
}

fn card_view(task: &Task) -> CardView {
    CardView {
        id: task.id,
        title: task.title.clone(),
        priority: task.priority.as_str().to_string(),
        priority_class: format!("priority-badge {}", task.priority.badge_class()),
        description: task.description().map(str::to_string),
        created: format_created(&task.created_at, &Local),
        transitions: Transition::from_status(task.status),
    }
}

/// Human-readable timestamp, e.g. "Jan 5, 2026, 03:04 PM"
pub fn format_created<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match parse_timestamp(raw) {
        Some(at) => at.with_timezone(tz).format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Offset-less forms, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339, or ISO / SQL style without an offset
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
