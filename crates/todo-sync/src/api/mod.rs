//! Remote Resource Client
//!
//! The four calls the app makes against the todos collection.
//! Implementations map any failure to the operation's [`TodoError`].

mod rest;

#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::Todo;

pub use rest::RestClient;

/// Remote todos collection
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Owner whose todos this client manages
    fn user_id(&self) -> u32;

    /// All todos of the owner, in server order
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Create an incomplete todo, returns the server record
    async fn create(&self, title: &str) -> TodoResult<Todo>;

    async fn delete(&self, id: u32) -> TodoResult<()>;

    /// Replace the whole record, returns the server record
    async fn update(&self, todo: &Todo) -> TodoResult<Todo>;
}
