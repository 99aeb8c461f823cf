use thiserror::Error;

use crate::model::{DraftError, TaskError, TemplateError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Task(#[from] TaskError),
}
