//! Priority Filter Component

use leptos::prelude::*;

use crate::actions;
use crate::models::{Filter, Priority};
use crate::store::{use_app_store, BoardStateStoreFields};

/// Single-select priority filter; changes re-render only
#[component]
pub fn PriorityFilter() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <label for="priorityFilter">"Priority:"</label>
            <select
                id="priorityFilter"
                prop:value=move || store.filter().read().control_value().to_string()
                on:change=move |ev| actions::set_filter(store, &event_target_value(&ev))
            >
                <option value={Filter::ALL_VALUE}>"All"</option>
                {Priority::CHOICES.into_iter().map(|priority| {
                    let value = priority.as_str().to_string();
                    let label = value.clone();
                    view! { <option value=value>{label}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
