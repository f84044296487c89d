//! Board Actions
//!
//! Event handlers wired to the controls. Each claims a pending key, runs the
//! matching sync operation off the event loop, and applies the result. The
//! guard is held for the whole operation, so the key is released on every path.

use chrono::Utc;
use leptos::task::spawn_local;
use tracing::debug;

use crate::commands::TaskApi;
use crate::context::AppContext;
use crate::models::{Filter, NewTask, Status, TaskId};
use crate::store::{store_apply, store_begin, store_set_filter, AppStore, PendingGuard, PendingKey};
use crate::sync::{self, BrowserPrompt, Operation, Prompt};

fn announce(prompt: &impl Prompt, op: Operation, enabled: bool) {
    if !enabled {
        return;
    }
    if let Some(notice) = op.success_notice() {
        prompt.notify(notice);
    }
}

/// Initial load, replacing the local list
pub fn load_tasks(ctx: AppContext, store: AppStore) {
    let Some(guard) = store_begin(&store, PendingKey::Load) else {
        debug!("Load already in flight");
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let _guard = guard;
        if let Some(mutation) = sync::fetch_tasks(&api, &BrowserPrompt).await {
            store_apply(&store, mutation);
        }
    });
}

/// Create from the form; `on_created` runs only after success
pub fn submit_new_task(
    ctx: AppContext,
    store: AppStore,
    draft: NewTask,
    on_created: impl FnOnce() + 'static,
) {
    let Some(guard) = store_begin(&store, PendingKey::Create) else {
        debug!("Create already in flight, ignoring submit");
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let created_at = Utc::now().to_rfc3339();
        run_create(
            store,
            guard,
            &api,
            &BrowserPrompt,
            draft,
            created_at,
            ctx.announce_success(),
            on_created,
        )
        .await;
    });
}

/// Create while holding `guard`. Returns true when the task was added.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn run_create(
    store: AppStore,
    guard: PendingGuard,
    api: &impl TaskApi,
    prompt: &impl Prompt,
    draft: NewTask,
    created_at: String,
    announce_success: bool,
    on_created: impl FnOnce(),
) -> bool {
    let _guard = guard;
    match sync::create_task(api, prompt, draft, created_at).await {
        Some(mutation) => {
            store_apply(&store, mutation);
            on_created();
            announce(prompt, Operation::Create, announce_success);
            true
        }
        None => false,
    }
}

pub fn change_status(ctx: AppContext, store: AppStore, id: TaskId, status: Status) {
    let Some(guard) = store_begin(&store, PendingKey::Task(id)) else {
        debug!("Task {} busy, ignoring status change", id);
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let _guard = guard;
        if let Some(mutation) = sync::update_task_status(&api, &BrowserPrompt, id, status).await {
            if store_apply(&store, mutation) == 0 {
                debug!("Task {} not in local list", id);
            }
        }
    });
}

pub fn remove_task(ctx: AppContext, store: AppStore, id: TaskId) {
    let Some(guard) = begin_delete(&store, &BrowserPrompt, id) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        run_delete(store, guard, &api, &BrowserPrompt, id, ctx.announce_success()).await;
    });
}

/// Confirm first; the store is not touched unless the user agrees
pub(crate) fn begin_delete(store: &AppStore, prompt: &impl Prompt, id: TaskId) -> Option<PendingGuard> {
    if !sync::confirm_delete(prompt, id) {
        return None;
    }
    let guard = store_begin(store, PendingKey::Task(id));
    if guard.is_none() {
        debug!("Task {} busy, ignoring delete", id);
    }
    guard
}

/// Delete while holding `guard`. Returns true when the task was removed.
pub(crate) async fn run_delete(
    store: AppStore,
    guard: PendingGuard,
    api: &impl TaskApi,
    prompt: &impl Prompt,
    id: TaskId,
    announce_success: bool,
) -> bool {
    let _guard = guard;
    match sync::delete_task(api, prompt, id).await {
        Some(mutation) => {
            store_apply(&store, mutation);
            announce(prompt, Operation::Delete, announce_success);
            true
        }
        None => false,
    }
}

/// Filter control change; re-renders only
pub fn set_filter(store: AppStore, value: &str) {
    store_set_filter(&store, Filter::from_control_value(value));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use leptos::prelude::*;
    use reactive_stores::Store;

    use super::*;
    use crate::models::{Priority, Task};
    use crate::store::{store_is_busy, store_is_pending, BoardState, BoardStateStoreFields, PendingSet};
    use crate::sync::tests::{make_task, Call, MockApi, ScriptedPrompt};

    fn make_store(owner: &Owner, tasks: Vec<Task>) -> AppStore {
        owner.with(|| Store::new(BoardState { tasks, ..Default::default() }))
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, Status::Todo, Priority::High),
            make_task(2, Status::Done, Priority::Low),
        ]
    }

    #[test]
    fn test_declined_delete_leaves_pending_untouched() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let prompt = ScriptedPrompt::answering(false);

        assert!(begin_delete(&store, &prompt, 1).is_none());
        assert_eq!(prompt.confirms.get(), 1);
        assert_eq!(*store.pending().read_untracked(), PendingSet::default());
        assert!(!store_is_busy(&store));
        assert_eq!(*store.tasks().read_untracked(), sample());
    }

    #[test]
    fn test_confirmed_delete_claims_task_key() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let prompt = ScriptedPrompt::answering(true);

        let guard = begin_delete(&store, &prompt, 1);
        assert!(guard.is_some());
        assert!(store_is_pending(&store, PendingKey::Task(1)));
        // A second click on the same card while the first is in flight
        assert!(begin_delete(&store, &prompt, 1).is_none());

        drop(guard);
        assert!(!store_is_busy(&store));
    }

    #[tokio::test]
    async fn test_failed_create_keeps_form_and_clears_loading() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let api = MockApi::failing(500);
        let prompt = ScriptedPrompt::default();
        let reset = Cell::new(false);

        let guard = store_begin(&store, PendingKey::Create).unwrap();
        assert!(store_is_busy(&store));
        let draft = NewTask::from_form("Doomed", "", "LOW").unwrap();
        let created = run_create(store, guard, &api, &prompt, draft, "now".into(), true, || {
            reset.set(true)
        })
        .await;

        assert!(!created);
        assert!(!reset.get());
        assert!(!store_is_busy(&store));
        assert_eq!(*store.tasks().read_untracked(), sample());
        assert_eq!(
            *prompt.notices.borrow(),
            vec![Operation::Create.failure_notice().to_string()]
        );
    }

    #[tokio::test]
    async fn test_successful_create_resets_form_and_announces() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let api = MockApi { next_id: 3, ..Default::default() };
        let prompt = ScriptedPrompt::default();
        let reset = Cell::new(false);

        let guard = store_begin(&store, PendingKey::Create).unwrap();
        let draft = NewTask::from_form("Fresh", "", "HIGH").unwrap();
        let created = run_create(store, guard, &api, &prompt, draft, "now".into(), true, || {
            reset.set(true)
        })
        .await;

        assert!(created);
        assert!(reset.get());
        assert!(!store_is_busy(&store));
        assert_eq!(store.tasks().read_untracked()[0].id, 3);
        assert_eq!(
            *prompt.notices.borrow(),
            vec!["✅ Task created successfully!".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_clears_loading() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let api = MockApi::failing(404);
        let prompt = ScriptedPrompt::answering(true);

        let guard = begin_delete(&store, &prompt, 2).unwrap();
        assert!(!run_delete(store, guard, &api, &prompt, 2, false).await);

        assert!(!store_is_busy(&store));
        assert_eq!(*store.tasks().read_untracked(), sample());
        assert_eq!(*api.calls.borrow(), vec![Call::Delete(2)]);
    }

    #[tokio::test]
    async fn test_delete_without_announcement() {
        let owner = Owner::new();
        let store = make_store(&owner, sample());
        let api = MockApi::default();
        let prompt = ScriptedPrompt::answering(true);

        let guard = begin_delete(&store, &prompt, 1).unwrap();
        assert!(run_delete(store, guard, &api, &prompt, 1, false).await);

        assert_eq!(*store.tasks().read_untracked(), vec![sample()[1].clone()]);
        assert!(prompt.notices.borrow().is_empty());
    }
}
