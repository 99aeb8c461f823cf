use std::sync::Arc;

use progress_core::model::{Task, TaskId};
use storage::TaskRepository;
use tracing::debug;

use crate::error::TaskServiceError;

/// Add, edit, toggle and remove dashboard tasks.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskService {
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Tasks in display order, newest first.
    ///
    /// # Errors
    ///
    /// Returns `TaskServiceError::Storage` if repository access fails.
    pub fn list(&self) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.tasks.list_tasks()?)
    }

    /// Create an open task at the top of the list.
    ///
    /// # Errors
    ///
    /// Returns `TaskServiceError::Task` for a blank description.
    /// Returns `TaskServiceError::Storage` if persistence fails.
    pub fn add(&self, description: &str) -> Result<Task, TaskServiceError> {
        let id = self.tasks.next_task_id()?;
        let task = Task::new(id, description)?;
        self.tasks.insert_task(&task)?;
        debug!(task = %id, "task added");
        Ok(task)
    }

    /// Replace a task's description.
    ///
    /// # Errors
    ///
    /// Returns `TaskServiceError::Task` for a blank description.
    /// Returns `TaskServiceError::Storage` if the task does not exist.
    pub fn edit(&self, id: TaskId, description: &str) -> Result<Task, TaskServiceError> {
        let mut task = self.tasks.get_task(id)?;
        task.rename(description)?;
        self.tasks.update_task(&task)?;
        Ok(task)
    }

    /// Flip a task between done and open.
    ///
    /// # Errors
    ///
    /// Returns `TaskServiceError::Storage` if the task does not exist.
    pub fn toggle(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        let mut task = self.tasks.get_task(id)?;
        task.toggle();
        self.tasks.update_task(&task)?;
        Ok(task)
    }

    /// Remove a task.
    ///
    /// # Errors
    ///
    /// Returns `TaskServiceError::Storage` if the task does not exist.
    pub fn delete(&self, id: TaskId) -> Result<(), TaskServiceError> {
        self.tasks.delete_task(id)?;
        debug!(task = %id, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_core::model::TaskError;
    use storage::{InMemoryRepository, StorageError};

    fn service() -> TaskService {
        TaskService::new(Arc::new(InMemoryRepository::seeded().unwrap()))
    }

    #[test]
    fn add_puts_new_task_first() {
        let svc = service();
        let task = svc.add("Treino de pernas").unwrap();
        let tasks = svc.list().unwrap();
        assert_eq!(tasks[0].id(), task.id());
        assert!(!tasks[0].is_done());
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn add_rejects_blank_description() {
        let err = service().add("  ").unwrap_err();
        assert!(matches!(
            err,
            TaskServiceError::Task(TaskError::EmptyDescription)
        ));
    }

    #[test]
    fn edit_only_changes_description() {
        let svc = service();
        let edited = svc.edit(TaskId::new(2), "Revisar aula de Rust").unwrap();
        assert_eq!(edited.description(), "Revisar aula de Rust");
        assert!(edited.is_done());
    }

    #[test]
    fn toggle_and_delete() {
        let svc = service();
        assert!(svc.toggle(TaskId::new(1)).unwrap().is_done());
        svc.delete(TaskId::new(3)).unwrap();
        let ids: Vec<u64> = svc.list().unwrap().iter().map(|t| t.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(matches!(
            svc.delete(TaskId::new(3)),
            Err(TaskServiceError::Storage(StorageError::NotFound))
        ));
    }
}
