//! New Todo Form Component
//!
//! Header input for creating todos.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::TodoError;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_title, set_new_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let creating = move || ctx.store.with(|state| state.placeholder.is_some());

    // Keep focus in the field on mount, once a create settles, and whenever
    // a delete or update asks for it
    Effect::new(move |_| {
        ctx.store.with(|state| state.focus_requests);
        if creating() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        let controller = ctx.controller();

        spawn_local(async move {
            match controller.create(&title).await {
                Ok(_) | Err(TodoError::EmptyTitle) => set_new_title.set(String::new()),
                // Keep the text so the user can retry
                Err(_) => {}
            }
        });
    };

    view! {
        <form on:submit=create_todo>
            <input
                node_ref=input_ref
                type="text"
                class="todoapp__new-todo"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                prop:disabled=creating
                on:input=move |ev| {
                    ctx.controller().hide_error();
                    set_new_title.set(event_target_value(&ev));
                }
            />
        </form>
    }
}
