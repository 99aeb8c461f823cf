use std::sync::Arc;

use progress_core::model::{
    DraftError, SessionDraft, SessionRecord, SetField, Template, TemplateId,
};
use storage::{SessionSink, StorageError, TemplateCatalog};
use tracing::{debug, info, warn};

use super::state::DraftState;
use crate::Clock;
use crate::error::SessionLogError;

/// Drives the "register session" flow: pick a template, fill in sets, submit.
///
/// Invalid exercise or set references are reported back to the caller but
/// never disturb the current draft.
pub struct SessionLogService {
    clock: Clock,
    catalog: Arc<dyn TemplateCatalog>,
    sink: Arc<dyn SessionSink>,
    selected: Option<Template>,
    draft: SessionDraft,
}

impl SessionLogService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<dyn TemplateCatalog>,
        sink: Arc<dyn SessionSink>,
    ) -> Self {
        Self {
            clock,
            catalog,
            sink,
            selected: None,
            draft: SessionDraft::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        if self.selected.is_some() {
            DraftState::Populated
        } else {
            DraftState::Empty
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state().can_submit()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Template> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn draft(&self) -> &SessionDraft {
        &self.draft
    }

    /// Select a template and start a fresh draft from it.
    ///
    /// Any edits to the previous draft are discarded, even when the same
    /// template is selected again.
    ///
    /// # Errors
    ///
    /// Returns `SessionLogError::UnknownTemplate` if the catalog has no such id;
    /// the current selection is kept in that case.
    pub fn select_template(&mut self, id: &TemplateId) -> Result<&SessionDraft, SessionLogError> {
        let template = match self.catalog.get_template(id) {
            Ok(template) => template,
            Err(StorageError::NotFound) => {
                return Err(SessionLogError::UnknownTemplate(id.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        self.draft = SessionDraft::from_template(Some(&template));
        debug!(
            template = %template.id(),
            exercises = self.draft.len(),
            sets = self.draft.total_entries(),
            "session draft created"
        );
        self.selected = Some(template);
        Ok(&self.draft)
    }

    /// Drop the selection and the draft.
    pub fn clear(&mut self) {
        self.selected = None;
        self.draft = SessionDraft::default();
    }

    /// Replace one field of one set.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` for an unknown exercise or set index; the draft is
    /// left as it was.
    pub fn edit_field(
        &mut self,
        exercise: &str,
        set_index: usize,
        field: SetField,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let result = self.draft.edit_field(exercise, set_index, field, value);
        self.apply(result)
    }

    /// Copy reps and weight of the previous set into `set_index`.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` for an unknown exercise or set index; the draft is
    /// left as it was.
    pub fn copy_previous(&mut self, exercise: &str, set_index: usize) -> Result<(), DraftError> {
        let result = self.draft.copy_previous(exercise, set_index);
        self.apply(result)
    }

    /// Finalize the draft, hand it to the sink and reset to `Empty`.
    ///
    /// # Errors
    ///
    /// Returns `SessionLogError::NoTemplate` when nothing is selected and
    /// `SessionLogError::Storage` if the sink rejects the record. The draft is
    /// kept on failure.
    pub fn submit(&mut self) -> Result<SessionRecord, SessionLogError> {
        let template_id = self
            .selected
            .as_ref()
            .map(|t| t.id().clone())
            .ok_or(SessionLogError::NoTemplate)?;

        let record = self.draft.finalize(template_id, self.clock.now());
        self.sink.record_session(&record)?;
        info!(
            template = %record.template_id(),
            date = %record.date_iso(),
            filled_sets = record.filled_sets(),
            "session registered"
        );

        self.clear();
        Ok(record)
    }

    fn apply(&mut self, result: Result<SessionDraft, DraftError>) -> Result<(), DraftError> {
        match result {
            Ok(next) => {
                self.draft = next;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "ignoring draft edit");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_core::model::SetEntry;
    use progress_core::time::fixed_clock;
    use storage::InMemoryRepository;

    fn service() -> (SessionLogService, InMemoryRepository) {
        let repo = InMemoryRepository::seeded().unwrap();
        let svc = SessionLogService::new(
            fixed_clock(),
            Arc::new(repo.clone()),
            Arc::new(repo.clone()),
        );
        (svc, repo)
    }

    #[test]
    fn starts_empty_and_cannot_submit() {
        let (mut svc, repo) = service();
        assert_eq!(svc.state(), DraftState::Empty);
        assert!(!svc.can_submit());
        assert!(matches!(svc.submit(), Err(SessionLogError::NoTemplate)));
        assert!(repo.recorded().unwrap().is_empty());
    }

    #[test]
    fn unknown_template_keeps_selection() {
        let (mut svc, _) = service();
        svc.select_template(&TemplateId::new("a")).unwrap();
        svc.edit_field("Voador", 0, SetField::Weight, "30").unwrap();

        let err = svc.select_template(&TemplateId::new("zz")).unwrap_err();
        assert!(matches!(err, SessionLogError::UnknownTemplate(id) if id.as_str() == "zz"));
        assert_eq!(svc.selected().map(|t| t.name()), Some("Upper A"));
        assert_eq!(svc.draft().entry("Voador", 0).unwrap().weight, "30");
    }

    #[test]
    fn invalid_edit_leaves_draft_untouched() {
        let (mut svc, _) = service();
        svc.select_template(&TemplateId::new("b")).unwrap();
        let before = svc.draft().clone();

        assert!(svc.edit_field("Hack", 4, SetField::Reps, "8").is_err());
        assert!(svc.edit_field("Supino reto", 0, SetField::Reps, "8").is_err());
        assert!(svc.copy_previous("Hack", 9).is_err());

        assert_eq!(svc.draft(), &before);
    }

    #[test]
    fn reselecting_same_template_resets_values() {
        let (mut svc, _) = service();
        svc.select_template(&TemplateId::new("c")).unwrap();
        svc.edit_field("Supino reto", 1, SetField::Reps, "9").unwrap();
        svc.select_template(&TemplateId::new("c")).unwrap();
        assert_eq!(svc.draft().entry("Supino reto", 1), Some(&SetEntry::default()));
    }

    #[test]
    fn clear_returns_to_empty() {
        let (mut svc, _) = service();
        svc.select_template(&TemplateId::new("d")).unwrap();
        svc.clear();
        assert_eq!(svc.state(), DraftState::Empty);
        assert!(svc.draft().is_empty());
    }
}
