//! Shared error types for the services crate.

use thiserror::Error;

use progress_core::model::{DraftError, TaskError, TemplateId};
use storage::StorageError;

/// Errors emitted by `SessionLogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionLogError {
    #[error("no template selected")]
    NoTemplate,
    #[error("unknown template: {0}")]
    UnknownTemplate(TemplateId),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TemplateService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateServiceError {
    #[error("unknown template: {0}")]
    NotFound(TemplateId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TaskService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaskServiceError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
