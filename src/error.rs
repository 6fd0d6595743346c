//! Error types returned by the todo model.

use sea_orm::DbErr;

/// Errors surfaced by [`crate::model::TodoModel`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] DbErr),

    #[error("Todo not found: {id}")]
    RecordNotFound { id: i32 },

    #[error("Invalid data: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true when the error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
