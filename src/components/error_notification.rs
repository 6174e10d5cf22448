//! Error Notification Component
//!
//! Banner for the current error message. Hidden by the close button, the
//! next action, or the auto-hide timer in `App`.

use leptos::prelude::*;
use todo_sync::TodoState;

use crate::context::use_app_context;

const BANNER_CLASS: &str = "notification is-danger is-light has-text-weight-normal";

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let message = move || ctx.store.with(TodoState::error_message);

    view! {
        <div class=move || if message().is_some() { BANNER_CLASS.to_string() } else { format!("{} hidden", BANNER_CLASS) }>
            <button type="button" class="delete" on:click=move |_| ctx.controller().hide_error() />
            {move || message().unwrap_or_default()}
        </div>
    }
}
