//! Todos Frontend App
//!
//! Root component: owns the state, loads the collection once on mount and
//! auto-hides the error banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{ApiConfig, RestClient, ERROR_HIDE_DELAY};

use crate::components::{ErrorNotification, FilterBar, NewTodoForm, TodoList, ToggleAllButton};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, user_id = config.user_id, "starting todos frontend");

    let ctx = AppContext::new(RestClient::new(config));
    provide_context(ctx);
    let store = ctx.store;

    // Load todos on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.load().await;
        });
    });

    // Each new banner restarts the hide timer
    let banner_generation = Memo::new(move |_| store.with(|state| state.error.map(|banner| banner.generation)));
    Effect::new(move |_| {
        if let Some(generation) = banner_generation.get() {
            spawn_local(async move {
                TimeoutFuture::new(ERROR_HIDE_DELAY.as_millis() as u32).await;
                ctx.controller().expire_error(generation);
            });
        }
    });

    let has_todos = move || store.with(|state| !state.is_empty());
    let show_list = move || store.with(|state| !state.is_empty() || state.placeholder.is_some());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <header class="todoapp__header">
                    <Show when=has_todos>
                        <ToggleAllButton />
                    </Show>
                    <NewTodoForm />
                </header>

                <Show when=show_list>
                    <TodoList />
                </Show>

                <Show when=has_todos>
                    <FilterBar />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}

