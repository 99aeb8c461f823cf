use std::sync::Arc;

use storage::{Storage, StorageError};

use crate::Clock;
use crate::sessions::SessionLogService;
use crate::task_service::TaskService;
use crate::template_service::TemplateService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    storage: Storage,
    templates: Arc<TemplateService>,
    tasks: Arc<TaskService>,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, storage: Storage) -> Self {
        let templates = Arc::new(TemplateService::new(Arc::clone(&storage.templates)));
        let tasks = Arc::new(TaskService::new(Arc::clone(&storage.tasks)));
        Self {
            clock,
            storage,
            templates,
            tasks,
        }
    }

    /// Services over the seeded in-memory catalog and task list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the built-in data fails validation.
    pub fn in_memory(clock: Clock) -> Result<Self, StorageError> {
        Ok(Self::new(clock, Storage::in_memory()?))
    }

    #[must_use]
    pub fn templates(&self) -> Arc<TemplateService> {
        Arc::clone(&self.templates)
    }

    #[must_use]
    pub fn tasks(&self) -> Arc<TaskService> {
        Arc::clone(&self.tasks)
    }

    /// A fresh, empty session logging flow.
    #[must_use]
    pub fn session_log(&self) -> SessionLogService {
        SessionLogService::new(
            self.clock,
            Arc::clone(&self.storage.templates),
            Arc::clone(&self.storage.sessions),
        )
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
