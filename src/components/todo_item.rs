//! Todo Item Component
//!
//! One todo row: status checkbox, title with inline edit on double-click,
//! remove button and a loader overlay while a request is pending.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{Todo, TodoStore};

use crate::context::use_app_context;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();
    let todo = StoredValue::new(todo);

    // Local edit buffer and the snapshot taken when edit mode opened
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(title.clone());
    let (previous, set_previous) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let is_pending = move || ctx.store.with(|state| state.is_pending(id));
    let is_completed = move || ctx.store.with(|state| state.get(id).is_some_and(|todo| todo.completed));

    // Focus the field when edit mode opens
    Effect::new(move |_| {
        if !editing.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let start_edit = move |_| {
        set_previous.set(draft.get_untracked());
        set_editing.set(true);
    };

    // Submit and blur both land here; the first one closes edit mode
    let finish_edit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);

        let previous = previous.get_untracked();
        let current = draft.get_untracked();
        set_draft.set(current.trim().to_string());

        let todo = todo.get_value();
        let controller = ctx.controller();
        spawn_local(async move {
            let outcome = controller.apply_edit(&todo, &previous, &current).await;
            tracing::debug!(id = todo.id, ?outcome, "edit finished");
        });
    };

    let cancel_edit = move || {
        set_draft.set(previous.get_untracked());
        set_editing.set(false);
    };

    let toggle_status = move |ev: web_sys::Event| {
        let checkbox = event_target::<web_sys::HtmlInputElement>(&ev);
        let todo = todo.get_value();
        let controller = ctx.controller();
        spawn_local(async move {
            controller.toggle(&todo).await;
            // The browser already flipped the box; a failed update must flip it back
            let completed = ctx
                .store
                .view_state(|state| state.get(id).is_some_and(|todo| todo.completed))
                .unwrap_or(todo.completed);
            checkbox.set_checked(completed);
        });
    };

    let remove = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.delete(&[id]).await;
        });
    };

    view! {
        <div class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=is_completed
                    on:change=toggle_status
                />
            </label>

            {move || if editing.get() {
                view! {
                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        finish_edit();
                    }>
                        <input
                            node_ref=input_ref
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty todo will be deleted"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:blur=move |_| finish_edit()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Escape" {
                                    ev.prevent_default();
                                    cancel_edit();
                                }
                            }
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span class="todo__title" on:dblclick=start_edit>{title.clone()}</span>
                    <button type="button" class="todo__remove" on:click=remove>"×"</button>
                }.into_any()
            }}

            <div class=move || if is_pending() { "modal overlay is-active" } else { "modal overlay" }>
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
