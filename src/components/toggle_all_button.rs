//! Toggle All Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::TodoState;

use crate::context::use_app_context;

/// Completes every open todo, or reopens all when all are done
#[component]
pub fn ToggleAllButton() -> impl IntoView {
    let ctx = use_app_context();
    let all_completed = move || ctx.store.with(TodoState::all_completed);

    view! {
        <button
            type="button"
            class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
            on:click=move |_| {
                let controller = ctx.controller();
                spawn_local(async move {
                    controller.toggle_all().await;
                });
            }
        />
    }
}
