//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! only changes through `Mutation`s produced by successful API calls.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Status, Task, TaskId};

/// Board view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All tasks, newest first after local creates
    pub tasks: Vec<Task>,
    /// Priority filter from the filter control
    pub filter: Filter,
    /// In-flight operations
    pub pending: PendingSet,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<BoardState>;

/// Get the board store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Mutations
// ========================

/// Effect of a successful operation on the local list
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Replace(Vec<Task>),
    Prepend(Task),
    SetStatus { id: TaskId, status: Status },
    Remove(TaskId),
}

impl Mutation {
    /// Apply to a task list. Returns the number of records touched.
    pub fn apply(self, tasks: &mut Vec<Task>) -> usize {
        match self {
            Mutation::Replace(fresh) => {
                *tasks = fresh;
                tasks.len()
            }
            Mutation::Prepend(task) => {
                tasks.insert(0, task);
                1
            }
            Mutation::SetStatus { id, status } => match tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.status = status;
                    1
                }
                None => 0,
            },
            Mutation::Remove(id) => {
                let before = tasks.len();
                tasks.retain(|t| t.id != id);
                before - tasks.len()
            }
        }
    }
}

// ========================
// Pending Operations
// ========================

/// Identity of an in-flight operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingKey {
    Load,
    Create,
    /// Status change or delete of one task
    Task(TaskId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingSet {
    keys: HashSet<PendingKey>,
}

impl PendingSet {
    /// Mark `key` as in flight; false if it already is
    pub fn begin(&mut self, key: PendingKey) -> bool {
        self.keys.insert(key)
    }

    pub fn finish(&mut self, key: PendingKey) {
        self.keys.remove(&key);
    }

    pub fn contains(&self, key: PendingKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_busy(&self) -> bool {
        !self.keys.is_empty()
    }
}

/// Releases its key when dropped
pub struct PendingGuard {
    store: AppStore,
    key: PendingKey,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(mut pending) = self.store.pending().try_write() {
            pending.finish(self.key);
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Claim `key` for an operation, or None if one is already running
pub fn store_begin(store: &AppStore, key: PendingKey) -> Option<PendingGuard> {
    store
        .pending()
        .write()
        .begin(key)
        .then(|| PendingGuard { store: *store, key })
}

/// Apply a mutation to the task list
pub fn store_apply(store: &AppStore, mutation: Mutation) -> usize {
    mutation.apply(&mut store.tasks().write())
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}

pub fn store_is_pending(store: &AppStore, key: PendingKey) -> bool {
    store.pending().read().contains(key)
}

pub fn store_is_busy(store: &AppStore) -> bool {
    store.pending().read().is_busy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_task(id: TaskId, status: Status) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            priority: Priority::Medium,
            status,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut tasks = vec![make_task(1, Status::Todo)];
        let fresh = vec![make_task(5, Status::Done), make_task(6, Status::Todo)];
        assert_eq!(Mutation::Replace(fresh.clone()).apply(&mut tasks), 2);
        assert_eq!(tasks, fresh);
    }

    #[test]
    fn test_prepend_places_new_task_first() {
        let mut tasks = vec![make_task(1, Status::Todo), make_task(2, Status::Done)];
        Mutation::Prepend(make_task(3, Status::Todo)).apply(&mut tasks);
        let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_set_status_changes_only_status() {
        let mut tasks = vec![make_task(1, Status::Todo), make_task(2, Status::Done)];
        let before = tasks[1].clone();
        let touched = Mutation::SetStatus { id: 2, status: Status::InProgress }.apply(&mut tasks);
        assert_eq!(touched, 1);
        assert_eq!(tasks[1].status, Status::InProgress);
        assert_eq!(Task { status: before.status, ..tasks[1].clone() }, before);
        assert_eq!(tasks[0], make_task(1, Status::Todo));
    }

    #[test]
    fn test_set_status_unknown_id_is_noop() {
        let mut tasks = vec![make_task(1, Status::Todo)];
        let touched = Mutation::SetStatus { id: 99, status: Status::Done }.apply(&mut tasks);
        assert_eq!(touched, 0);
        assert_eq!(tasks, vec![make_task(1, Status::Todo)]);
    }

    #[test]
    fn test_remove_keeps_others_in_order() {
        let mut tasks = vec![
            make_task(1, Status::Todo),
            make_task(2, Status::InProgress),
            make_task(3, Status::Done),
        ];
        assert_eq!(Mutation::Remove(2).apply(&mut tasks), 1);
        assert_eq!(tasks, vec![make_task(1, Status::Todo), make_task(3, Status::Done)]);
    }

    #[test]
    fn test_pending_set_deduplicates() {
        let mut pending = PendingSet::default();
        assert!(!pending.is_busy());
        assert!(pending.begin(PendingKey::Task(4)));
        assert!(!pending.begin(PendingKey::Task(4)));
        assert!(pending.begin(PendingKey::Task(5)));
        assert!(pending.contains(PendingKey::Task(4)));

        pending.finish(PendingKey::Task(4));
        assert!(!pending.contains(PendingKey::Task(4)));
        assert!(pending.is_busy());

        pending.finish(PendingKey::Task(5));
        assert!(!pending.is_busy());
    }

    #[test]
    fn test_store_begin_holds_key_until_guard_drops() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(BoardState::new()));

        let guard = store_begin(&store, PendingKey::Create).unwrap();
        assert!(store_is_busy(&store));
        assert!(store_begin(&store, PendingKey::Create).is_none());

        let other = store_begin(&store, PendingKey::Task(1));
        assert!(other.is_some());

        drop(guard);
        assert!(!store_is_pending(&store, PendingKey::Create));
        assert!(store_is_busy(&store));

        drop(other);
        assert!(!store_is_busy(&store));
        assert!(store_begin(&store, PendingKey::Create).is_some());
    }
}
