mod draft;
mod ids;
mod record;
mod task;
mod template;

pub use ids::{ParseIdError, TaskId, TemplateId};

pub use draft::{DraftError, SessionDraft, SetEntry, SetField};
pub use record::SessionRecord;
pub use task::{Task, TaskError};
pub use template::{ExerciseDefinition, Template, TemplateError};
