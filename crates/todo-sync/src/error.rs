//! Error Taxonomy
//!
//! Every failure the user can see. The `Display` text is the banner message.

use thiserror::Error;

/// Result alias for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// User-facing todo errors
///
/// Remote variants deliberately carry no detail: the transport error is
/// logged where it happens and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Unable to load todos")]
    LoadFailed,
    #[error("Unable to add a todo")]
    CreateFailed,
    #[error("Unable to delete a todo")]
    DeleteFailed,
    #[error("Unable to update a todo")]
    UpdateFailed,
    #[error("Title should not be empty")]
    EmptyTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_messages() {
        assert_eq!(TodoError::LoadFailed.to_string(), "Unable to load todos");
        assert_eq!(TodoError::CreateFailed.to_string(), "Unable to add a todo");
        assert_eq!(TodoError::DeleteFailed.to_string(), "Unable to delete a todo");
        assert_eq!(TodoError::UpdateFailed.to_string(), "Unable to update a todo");
        assert_eq!(TodoError::EmptyTitle.to_string(), "Title should not be empty");
    }
}
