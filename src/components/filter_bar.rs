//! Filter Bar Component
//!
//! Footer with the items-left counter, filter links and bulk clear.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{Filter, TodoState};

use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    let active_count = move || ctx.store.with(TodoState::active_count);
    let current_filter = move || ctx.store.with(|state| state.filter);
    // Disabled while every todo is still active
    let nothing_completed = move || ctx.store.with(|state| state.completed_count() == 0);

    let clear_completed = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.clear_completed().await;
        });
    };

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", active_count())}</span>

            <nav class="filter">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_selected = move || current_filter() == filter;
                    view! {
                        <a
                            href=filter.href()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            on:click=move |_| ctx.controller().set_filter(filter)
                        >
                            {filter.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                prop:disabled=nothing_completed
                on:click=clear_completed
            >
                "Clear completed"
            </button>
        </footer>
    }
}
