//! Todo List Component
//!
//! Renders the filtered todos plus the placeholder of an in-flight create.

use leptos::prelude::*;
use todo_sync::{Todo, TodoState};

use crate::components::TodoItem;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || ctx.store.with(TodoState::visible);
    let placeholder = move || ctx.store.with(|state| state.placeholder.clone());

    view! {
        <section class="todoapp__main">
            <For
                each=visible
                // Title and status in the key so an edited todo re-seeds its buffer
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || placeholder().map(|todo| view! { <PlaceholderItem todo=todo /> })}
        </section>
    }
}

/// Read-only row with an active loader, shown until the create settles
#[component]
fn PlaceholderItem(todo: Todo) -> impl IntoView {
    view! {
        <div class="todo">
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" disabled=true />
            </label>

            <span class="todo__title">{todo.title}</span>
            <button type="button" class="todo__remove" disabled=true>"×"</button>

            <div class="modal overlay is-active">
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
