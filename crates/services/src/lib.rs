#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod sessions;
pub mod task_service;
pub mod template_service;

pub use progress_core::Clock;

pub use app_services::AppServices;
pub use error::{SessionLogError, TaskServiceError, TemplateServiceError};
pub use sessions::{DraftState, SessionLogService};
pub use task_service::TaskService;
pub use template_service::{TemplateService, TemplateSummary};
