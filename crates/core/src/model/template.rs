use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TemplateId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("template id cannot be empty")]
    EmptyId,

    #[error("template name cannot be empty")]
    EmptyName,

    #[error("exercise name cannot be empty")]
    EmptyExerciseName,

    #[error("exercise `{name}` must have at least one set")]
    ZeroSets { name: String },
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// A target exercise inside a template: how many working sets and which rep range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    name: String,
    sets: u32,
    reps: String,
}

impl ExerciseDefinition {
    /// Creates an exercise definition.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::EmptyExerciseName` for a blank name and
    /// `TemplateError::ZeroSets` when `sets` is zero.
    pub fn new(
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyExerciseName);
        }
        if sets == 0 {
            return Err(TemplateError::ZeroSets { name });
        }
        Ok(Self {
            name,
            sets,
            reps: reps.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sets(&self) -> u32 {
        self.sets
    }

    /// Target rep range as free-form text, e.g. `"8-12"`.
    #[must_use]
    pub fn reps(&self) -> &str {
        &self.reps
    }

    /// Short goal label such as `3x8-12`.
    #[must_use]
    pub fn goal_label(&self) -> String {
        format!("{}x{}", self.sets, self.reps)
    }
}

//
// ─── TEMPLATE ──────────────────────────────────────────────────────────────────
//

/// A reusable, named list of target exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    name: String,
    tag: String,
    exercises: Vec<ExerciseDefinition>,
}

impl Template {
    /// Creates a template.
    ///
    /// Exercise name uniqueness is left to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` if the id or name is blank.
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        tag: impl Into<String>,
        exercises: Vec<ExerciseDefinition>,
    ) -> Result<Self, TemplateError> {
        if id.as_str().trim().is_empty() {
            return Err(TemplateError::EmptyId);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            tag: tag.into(),
            exercises,
        })
    }

    #[must_use]
    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Looks up an exercise by name.
    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|ex| ex.name == name)
    }

    /// Sum of target sets across all exercises.
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(ExerciseDefinition::sets).sum()
    }

    /// Display label used by selectors, e.g. `Upper A (A)`.
    #[must_use]
    pub fn label(&self) -> String {
        if self.tag.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.tag)
        }
    }
}
