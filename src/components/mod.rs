//! UI Components
//!
//! Leptos adapter for the board view model.

mod loading_overlay;
mod new_task_form;
mod priority_filter;
mod status_column;
mod task_card;

pub use loading_overlay::LoadingOverlay;
pub use new_task_form::NewTaskForm;
pub use priority_filter::PriorityFilter;
pub use status_column::StatusColumn;
pub use task_card::TaskCard;
