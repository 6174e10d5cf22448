//! Scripted in-memory [`TodoApi`] for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;

use super::TodoApi;
use crate::error::{TodoError, TodoResult};
use crate::models::Todo;

/// Id the mock server hands out for every created todo
pub const SERVER_ASSIGNED_ID: u32 = 900;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(String),
    Delete(u32),
    Update(Todo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(u32),
    End(u32),
}

#[derive(Default)]
struct Inner {
    server: Vec<Todo>,
    fail_list: bool,
    fail_create: bool,
    fail_ids: HashSet<u32>,
    server_titles: HashMap<u32, String>,
    calls: Vec<Call>,
    events: Vec<Event>,
}

/// Cloneable handle; clones share the same script and call log
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Rc<RefCell<Inner>>,
}

impl MockApi {
    pub const USER_ID: u32 = 2039;

    pub fn with_server(todos: Vec<Todo>) -> Self {
        let api = Self::default();
        api.inner.borrow_mut().server = todos;
        api
    }

    pub fn fail_list(&self) {
        self.inner.borrow_mut().fail_list = true;
    }

    pub fn fail_create(&self) {
        self.inner.borrow_mut().fail_create = true;
    }

    /// Make delete/update of `id` fail
    pub fn fail_id(&self, id: u32) {
        self.inner.borrow_mut().fail_ids.insert(id);
    }

    /// Server answers updates of `id` with `title` instead of the sent one
    pub fn rewrite_title(&self, id: u32, title: &str) {
        self.inner.borrow_mut().server_titles.insert(id, title.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.inner.borrow().events.clone()
    }

    fn record(&self, call: Call) {
        self.inner.borrow_mut().calls.push(call);
    }

    /// Suspend once between request and response so concurrent callers interleave
    async fn round_trip(&self, id: u32) -> bool {
        self.inner.borrow_mut().events.push(Event::Start(id));
        tokio::task::yield_now().await;
        let mut inner = self.inner.borrow_mut();
        inner.events.push(Event::End(id));
        !inner.fail_ids.contains(&id)
    }
}

#[async_trait(?Send)]
impl TodoApi for MockApi {
    fn user_id(&self) -> u32 {
        Self::USER_ID
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        self.record(Call::List);
        let inner = self.inner.borrow();
        if inner.fail_list {
            return Err(TodoError::LoadFailed);
        }
        Ok(inner.server.clone())
    }

    async fn create(&self, title: &str) -> TodoResult<Todo> {
        self.record(Call::Create(title.to_string()));
        tokio::task::yield_now().await;
        if self.inner.borrow().fail_create {
            return Err(TodoError::CreateFailed);
        }
        Ok(Todo {
            id: SERVER_ASSIGNED_ID,
            user_id: Self::USER_ID,
            title: title.to_string(),
            completed: false,
        })
    }

    async fn delete(&self, id: u32) -> TodoResult<()> {
        self.record(Call::Delete(id));
        if !self.round_trip(id).await {
            return Err(TodoError::DeleteFailed);
        }
        self.inner.borrow_mut().server.retain(|todo| todo.id != id);
        Ok(())
    }

    async fn update(&self, todo: &Todo) -> TodoResult<Todo> {
        self.record(Call::Update(todo.clone()));
        if !self.round_trip(todo.id).await {
            return Err(TodoError::UpdateFailed);
        }
        let mut saved = todo.clone();
        if let Some(title) = self.inner.borrow().server_titles.get(&todo.id) {
            saved.title = title.clone();
        }
        Ok(saved)
    }
}
