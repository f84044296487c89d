//! New Task Form Component
//!
//! Title, description and priority. Reset only after a successful create.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::{NewTask, Priority};
use crate::store::{store_is_pending, use_app_store, PendingKey};
use crate::sync::{BrowserPrompt, Prompt};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let default_priority = || Priority::default().as_str().to_string();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(default_priority());

    let creating = move || store_is_pending(&store, PendingKey::Create);

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(default_priority());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match NewTask::from_form(&title.get(), &description.get(), &priority.get()) {
            Ok(draft) => actions::submit_new_task(ctx, store, draft, reset),
            Err(err) => BrowserPrompt.notify(&err.to_string()),
        }
    };

    view! {
        <form class="add-task-form" on:submit=on_submit>
            <div class="form-group">
                <label for="taskTitle">"Title *"</label>
                <input
                    id="taskTitle"
                    type="text"
                    placeholder="Enter task title..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="taskDescription">"Description"</label>
                <textarea
                    id="taskDescription"
                    placeholder="Optional details..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-group">
                <label for="taskPriority">"Priority"</label>
                <select
                    id="taskPriority"
                    prop:value=move || priority.get()
                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                >
                    {Priority::CHOICES.into_iter().map(|choice| {
                        let value = choice.as_str().to_string();
                        let label = value.clone();
                        view! { <option value=value>{label}</option> }
                    }).collect_view()}
                </select>
            </div>

            <button type="submit" class="btn btn-primary" disabled=creating>
                {move || if creating() { "Adding..." } else { "➕ Add Task" }}
            </button>
        </form>
    }
}
