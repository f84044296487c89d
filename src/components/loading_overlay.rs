//! Loading Overlay Component

use leptos::prelude::*;

use crate::store::{store_is_busy, use_app_store};

/// Full-page spinner, visible while any request is in flight. Does not block input.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div
            class="loading-overlay"
            style:display=move || if store_is_busy(&store) { "flex" } else { "none" }
        >
            <div class="spinner"></div>
        </div>
    }
}
