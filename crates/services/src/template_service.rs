use std::sync::Arc;

use progress_core::model::{Template, TemplateId};
use serde::Serialize;
use storage::{StorageError, TemplateCatalog};

use crate::error::TemplateServiceError;

/// Row shown in the template list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: String,
    pub tag: String,
    pub exercises: usize,
    pub total_sets: u32,
}

impl TemplateSummary {
    #[must_use]
    pub fn from_template(template: &Template) -> Self {
        Self {
            id: template.id().clone(),
            name: template.name().to_owned(),
            tag: template.tag().to_owned(),
            exercises: template.exercises().len(),
            total_sets: template.total_sets(),
        }
    }
}

/// Read access to the workout template catalog.
#[derive(Clone)]
pub struct TemplateService {
    catalog: Arc<dyn TemplateCatalog>,
}

impl TemplateService {
    #[must_use]
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// List templates in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `TemplateServiceError::Storage` if the catalog cannot be read.
    pub fn list(&self) -> Result<Vec<TemplateSummary>, TemplateServiceError> {
        let templates = self.catalog.list_templates()?;
        Ok(templates.iter().map(TemplateSummary::from_template).collect())
    }

    /// Fetch the full template, exercises included.
    ///
    /// # Errors
    ///
    /// Returns `TemplateServiceError::NotFound` for an unknown id.
    pub fn view(&self, id: &TemplateId) -> Result<Template, TemplateServiceError> {
        self.catalog.get_template(id).map_err(|e| match e {
            StorageError::NotFound => TemplateServiceError::NotFound(id.clone()),
            other => TemplateServiceError::Storage(other),
        })
    }
}
