use progress_core::model::{SessionRecord, Task, TaskId, Template, TemplateId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::seed;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid seed data: {0}")]
    Seed(#[from] progress_core::Error),
}

/// Read-only source of workout templates.
pub trait TemplateCatalog: Send + Sync {
    /// All templates in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn list_templates(&self) -> Result<Vec<Template>, StorageError>;

    /// Fetch a template by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    fn get_template(&self, id: &TemplateId) -> Result<Template, StorageError>;
}

/// Consumer of finalized session records.
pub trait SessionSink: Send + Sync {
    /// Accept a finalized record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be accepted.
    fn record_session(&self, record: &SessionRecord) -> Result<(), StorageError>;

    /// Records accepted so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the records cannot be read.
    fn recorded(&self) -> Result<Vec<SessionRecord>, StorageError>;
}

/// Ordered to-do list storage.
pub trait TaskRepository: Send + Sync {
    /// Tasks in display order (newest first).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be read.
    fn list_tasks(&self) -> Result<Vec<Task>, StorageError>;

    /// Reserve an unused task id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the id cannot be allocated.
    fn next_task_id(&self) -> Result<TaskId, StorageError>;

    /// Insert a new task at the top of the list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id already exists.
    fn insert_task(&self, task: &Task) -> Result<(), StorageError>;

    /// Replace an existing task in place.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the id is unknown.
    fn update_task(&self, task: &Task) -> Result<(), StorageError>;

    /// Remove a task.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the id is unknown.
    fn delete_task(&self, id: TaskId) -> Result<(), StorageError>;

    /// Fetch a task by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing.
    fn get_task(&self, id: TaskId) -> Result<Task, StorageError> {
        self.list_tasks()?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or(StorageError::NotFound)
    }
}

/// In-memory repository backing the dashboard's mock data.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    templates: Arc<Mutex<Vec<Template>>>,
    sessions: Arc<Mutex<Vec<SessionRecord>>>,
    tasks: Arc<Mutex<Vec<Task>>>,
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Connection(e.to_string())
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-loaded with the built-in templates and starter tasks.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the built-in data fails validation.
    pub fn seeded() -> Result<Self, StorageError> {
        let templates = seed::builtin_templates().map_err(progress_core::Error::from)?;
        let tasks = seed::sample_tasks().map_err(progress_core::Error::from)?;
        Ok(Self::with_data(templates, tasks))
    }

    #[must_use]
    pub fn with_data(templates: Vec<Template>, tasks: Vec<Task>) -> Self {
        Self {
            templates: Arc::new(Mutex::new(templates)),
            sessions: Arc::new(Mutex::new(Vec::new())),
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }
}

impl TemplateCatalog for InMemoryRepository {
    fn list_templates(&self) -> Result<Vec<Template>, StorageError> {
        let guard = self.templates.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    fn get_template(&self, id: &TemplateId) -> Result<Template, StorageError> {
        let guard = self.templates.lock().map_err(poisoned)?;
        guard
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

impl SessionSink for InMemoryRepository {
    fn record_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let mut guard = self.sessions.lock().map_err(poisoned)?;
        guard.push(record.clone());
        Ok(())
    }

    fn recorded(&self) -> Result<Vec<SessionRecord>, StorageError> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

impl TaskRepository for InMemoryRepository {
    fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let guard = self.tasks.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    fn next_task_id(&self) -> Result<TaskId, StorageError> {
        let guard = self.tasks.lock().map_err(poisoned)?;
        let max = guard.iter().map(|t| t.id().value()).max().unwrap_or(0);
        Ok(TaskId::new(max + 1))
    }

    fn insert_task(&self, task: &Task) -> Result<(), StorageError> {
        let mut guard = self.tasks.lock().map_err(poisoned)?;
        if guard.iter().any(|t| t.id() == task.id()) {
            return Err(StorageError::Conflict);
        }
        guard.insert(0, task.clone());
        Ok(())
    }

    fn update_task(&self, task: &Task) -> Result<(), StorageError> {
        let mut guard = self.tasks.lock().map_err(poisoned)?;
        let slot = guard
            .iter_mut()
            .find(|t| t.id() == task.id())
            .ok_or(StorageError::NotFound)?;
        *slot = task.clone();
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> Result<(), StorageError> {
        let mut guard = self.tasks.lock().map_err(poisoned)?;
        let before = guard.len();
        guard.retain(|t| t.id() != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub templates: Arc<dyn TemplateCatalog>,
    pub sessions: Arc<dyn SessionSink>,
    pub tasks: Arc<dyn TaskRepository>,
}

impl Storage {
    /// In-memory storage seeded with the built-in data.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the built-in data fails validation.
    pub fn in_memory() -> Result<Self, StorageError> {
        let repo = InMemoryRepository::seeded()?;
        Ok(Self::from_repository(repo))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let templates: Arc<dyn TemplateCatalog> = Arc::new(repo.clone());
        let sessions: Arc<dyn SessionSink> = Arc::new(repo.clone());
        let tasks: Arc<dyn TaskRepository> = Arc::new(repo);
        Self {
            templates,
            sessions,
            tasks,
        }
    }
}
