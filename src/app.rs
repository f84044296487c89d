//! Task Board App
//!
//! Root component: form, filter and the three status columns.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{LoadingOverlay, NewTaskForm, PriorityFilter, StatusColumn};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::models::Status;
use crate::store::{BoardState, BoardStateStoreFields};
use crate::view_model::render_board;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::new());
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| actions::load_tasks(ctx, store));

    let board = Memo::new(move |_| render_board(&store.tasks().read(), &store.filter().read()));

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"📋 Task Board"</h1>
            </header>

            <NewTaskForm />
            <PriorityFilter />

            <main class="board">
                {Status::ALL.into_iter().map(|status| view! {
                    <StatusColumn status=status board=board />
                }).collect_view()}
            </main>

            <LoadingOverlay />
        </div>
    }
}
