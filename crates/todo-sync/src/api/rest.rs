//! REST implementation of [`TodoApi`] over `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::config::ApiConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::{NewTodo, Todo, TodoPatch};

/// HTTP client for `<base>/todos`
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: ApiConfig,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn list_url(&self) -> String {
        format!("{}?userId={}", self.config.collection_url(), self.config.user_id)
    }
}

#[async_trait(?Send)]
impl TodoApi for RestClient {
    fn user_id(&self) -> u32 {
        self.config.user_id
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let url = self.list_url();
        tracing::debug!(%url, "GET todos");
        fetch_json(self.http.get(&url))
            .await
            .map_err(reported(TodoError::LoadFailed))
    }

    async fn create(&self, title: &str) -> TodoResult<Todo> {
        let url = self.config.collection_url();
        tracing::debug!(%url, title, "POST todo");
        let body = NewTodo::new(title, self.config.user_id);
        fetch_json(self.http.post(&url).json(&body))
            .await
            .map_err(reported(TodoError::CreateFailed))
    }

    async fn delete(&self, id: u32) -> TodoResult<()> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, "DELETE todo");
        fetch(self.http.delete(&url))
            .await
            .map_err(reported(TodoError::DeleteFailed))
    }

    async fn update(&self, todo: &Todo) -> TodoResult<Todo> {
        let url = self.config.item_url(todo.id);
        tracing::debug!(%url, completed = todo.completed, "PATCH todo");
        fetch_json(self.http.patch(&url).json(&TodoPatch::from(todo)))
            .await
            .map_err(reported(TodoError::UpdateFailed))
    }
}

async fn fetch(request: RequestBuilder) -> reqwest::Result<()> {
    request.send().await?.error_for_status()?;
    Ok(())
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> reqwest::Result<T> {
    request.send().await?.error_for_status()?.json().await
}

/// Log the transport error and collapse it into `kind`
fn reported(kind: TodoError) -> impl FnOnce(reqwest::Error) -> TodoError {
    move |err| {
        tracing::warn!(error = %err, status = ?err.status(), "{}", kind);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_carries_owner() {
        let client = RestClient::new(ApiConfig {
            base_url: "http://api.test/".to_string(),
            user_id: 11,
        });
        assert_eq!(client.list_url(), "http://api.test/todos?userId=11");
        assert_eq!(client.user_id(), 11);
    }
}
