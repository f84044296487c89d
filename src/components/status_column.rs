//! Status Column Component
//!
//! One board column: header with count, then cards or the empty state.

use leptos::prelude::*;

use super::TaskCard;
use crate::models::Status;
use crate::view_model::{BoardView, EMPTY_COLUMN_TEXT};

#[component]
pub fn StatusColumn(status: Status, board: Memo<BoardView>) -> impl IntoView {
    let column = move || board.with(|b| b.column(status).clone());

    view! {
        <section class=format!("column column-{}", status.as_str().to_lowercase())>
            <div class="column-header">
                <h2>{status.label()}</h2>
                <span class="task-count">{move || board.with(|b| b.column(status).count)}</span>
            </div>
            <div class="task-list">
                {move || {
                    let column = column();
                    if column.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>{EMPTY_COLUMN_TEXT}</p>
                            </div>
                        }.into_any()
                    } else {
                        column.cards.into_iter()
                            .map(|card| view! { <TaskCard card=card /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
