use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TaskId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TaskError {
    #[error("task description cannot be empty")]
    EmptyDescription,
}

/// A to-do item on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    done: bool,
}

impl Task {
    /// Creates an open task.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyDescription` if the description is blank.
    pub fn new(id: TaskId, description: impl Into<String>) -> Result<Self, TaskError> {
        let description = validate_description(description.into())?;
        Ok(Self {
            id,
            description,
            done: false,
        })
    }

    /// Rehydrate a task with an explicit completion flag.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyDescription` if the description is blank.
    pub fn from_persisted(
        id: TaskId,
        description: impl Into<String>,
        done: bool,
    ) -> Result<Self, TaskError> {
        let mut task = Self::new(id, description)?;
        task.done = done;
        Ok(task)
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Replaces the description, keeping id and completion state.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyDescription` if the new description is blank.
    pub fn rename(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        self.description = validate_description(description.into())?;
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

fn validate_description(description: String) -> Result<String, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    Ok(trimmed.to_owned())
}
