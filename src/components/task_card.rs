//! Task Card Component
//!
//! Renders one `CardView` with its status controls and delete button.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::{store_is_pending, use_app_store, PendingKey};
use crate::view_model::CardView;

#[component]
pub fn TaskCard(card: CardView) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = card.id;
    // Controls are disabled while a change to this task is in flight
    let busy = move || store_is_pending(&store, PendingKey::Task(id));

    view! {
        <div class="task-card" class:busy=busy>
            <div class="task-header">
                <div class="task-title">{card.title}</div>
                <span class=card.priority_class>{card.priority}</span>
            </div>

            {card.description.map(|description| view! {
                <div class="task-description">{description}</div>
            })}

            <div class="task-meta">"Created: " {card.created}</div>

            <div class="task-actions">
                {card.transitions.into_iter().map(|transition| view! {
                    <button
                        class=transition.button_class()
                        disabled=busy
                        on:click=move |_| actions::change_status(ctx, store, id, transition.target)
                    >
                        {transition.label()}
                    </button>
                }).collect_view()}

                <button
                    class="btn btn-danger btn-sm"
                    disabled=busy
                    on:click=move |_| actions::remove_task(ctx, store, id)
                >
                    "🗑️ Delete"
                </button>
            </div>
        </div>
    }
}
