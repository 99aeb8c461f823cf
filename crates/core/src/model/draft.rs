use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TemplateId;
use crate::model::record::SessionRecord;
use crate::model::template::Template;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A draft operation referenced an exercise or set that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    #[error("exercise `{name}` is not part of the draft")]
    UnknownExercise { name: String },

    #[error("set {index} is out of range for `{exercise}` ({len} sets)")]
    SetOutOfRange {
        exercise: String,
        index: usize,
        len: usize,
    },
}

//
// ─── SET ENTRY ─────────────────────────────────────────────────────────────────
//

/// One logged working set. Values are raw form text, not yet parsed as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: String,
    pub weight: String,
}

impl SetEntry {
    #[must_use]
    pub fn new(reps: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            reps: reps.into(),
            weight: weight.into(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.reps.is_empty() && self.weight.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: SetField) -> &str {
        match field {
            SetField::Reps => &self.reps,
            SetField::Weight => &self.weight,
        }
    }

    fn set(&mut self, field: SetField, value: String) {
        match field {
            SetField::Reps => self.reps = value,
            SetField::Weight => self.weight = value,
        }
    }
}

/// Editable field of a [`SetEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetField {
    Reps,
    Weight,
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetField::Reps => f.write_str("reps"),
            SetField::Weight => f.write_str("weight"),
        }
    }
}

impl FromStr for SetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reps" => Ok(SetField::Reps),
            "weight" => Ok(SetField::Weight),
            other => Err(format!("unknown set field: {other}")),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// In-progress per-exercise sets of a workout session.
///
/// Keys are the exercise names of the template the draft was built from,
/// iterated in template order. Every structural operation returns a new
/// draft; nothing is mutated behind a caller's back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    order: Vec<String>,
    sets: HashMap<String, Vec<SetEntry>>,
}

impl SessionDraft {
    /// Builds a fresh draft with `sets` blank entries per exercise.
    ///
    /// `None` yields an empty draft. A repeated exercise name keeps its first
    /// position and the last definition's set count.
    #[must_use]
    pub fn from_template(template: Option<&Template>) -> Self {
        let mut draft = Self::default();
        let Some(template) = template else {
            return draft;
        };

        for exercise in template.exercises() {
            let entries = vec![SetEntry::default(); exercise.sets() as usize];
            let name = exercise.name().to_owned();
            if draft.sets.insert(name.clone(), entries).is_none() {
                draft.order.push(name);
            }
        }
        draft
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of exercises in the draft.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Total number of set entries across all exercises.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn contains(&self, exercise: &str) -> bool {
        self.sets.contains_key(exercise)
    }

    /// Exercise names in template order.
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn sets(&self, exercise: &str) -> Option<&[SetEntry]> {
        self.sets.get(exercise).map(Vec::as_slice)
    }

    #[must_use]
    pub fn entry(&self, exercise: &str, set_index: usize) -> Option<&SetEntry> {
        self.sets.get(exercise).and_then(|sets| sets.get(set_index))
    }

    /// `(exercise, sets)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SetEntry])> {
        self.order
            .iter()
            .filter_map(|name| self.sets.get(name).map(|sets| (name.as_str(), sets.as_slice())))
    }

    /// Returns a new draft with one field of one set replaced.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::UnknownExercise` or `DraftError::SetOutOfRange`
    /// when the reference does not exist in this draft.
    pub fn edit_field(
        &self,
        exercise: &str,
        set_index: usize,
        field: SetField,
        value: impl Into<String>,
    ) -> Result<Self, DraftError> {
        self.check(exercise, set_index)?;
        let mut next = self.clone();
        if let Some(entry) = next.entry_mut(exercise, set_index) {
            entry.set(field, value.into());
        }
        Ok(next)
    }

    /// Returns a new draft where set `set_index` holds the values of set `set_index - 1`.
    ///
    /// Index 0 has no previous set and returns an unchanged copy.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::UnknownExercise` or `DraftError::SetOutOfRange`
    /// when the reference does not exist in this draft.
    pub fn copy_previous(&self, exercise: &str, set_index: usize) -> Result<Self, DraftError> {
        self.check(exercise, set_index)?;
        if set_index == 0 {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let previous = next
            .entry(exercise, set_index - 1)
            .cloned()
            .unwrap_or_default();
        if let Some(entry) = next.entry_mut(exercise, set_index) {
            *entry = previous;
        }
        Ok(next)
    }

    /// Snapshots the draft into an immutable record stamped with `at`.
    #[must_use]
    pub fn finalize(&self, template_id: TemplateId, at: DateTime<Utc>) -> SessionRecord {
        let entries = self
            .iter()
            .map(|(name, sets)| (name.to_owned(), sets.to_vec()))
            .collect();
        SessionRecord::new(template_id, at, entries)
    }

    fn check(&self, exercise: &str, set_index: usize) -> Result<(), DraftError> {
        let sets = self
            .sets
            .get(exercise)
            .ok_or_else(|| DraftError::UnknownExercise {
                name: exercise.to_owned(),
            })?;
        if set_index >= sets.len() {
            return Err(DraftError::SetOutOfRange {
                exercise: exercise.to_owned(),
                index: set_index,
                len: sets.len(),
            });
        }
        Ok(())
    }

    fn entry_mut(&mut self, exercise: &str, set_index: usize) -> Option<&mut SetEntry> {
        self.sets
            .get_mut(exercise)
            .and_then(|sets| sets.get_mut(set_index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::model::template::ExerciseDefinition;
    use crate::time::fixed_now;

    fn upper_a() -> Template {
        let exercises = [
            ("Supino Inclinado (halter)", 2),
            ("Voador", 3),
            ("Puxada Alta", 3),
            ("Remada Máquina", 3),
            ("Desenvolvimento c/ Halteres", 3),
            ("Tríceps pulley", 3),
            ("Rosca direta", 3),
        ]
        .into_iter()
        .map(|(name, sets)| ExerciseDefinition::new(name, sets, "8-12").unwrap())
        .collect();
        Template::new(TemplateId::new("a"), "Upper A", "(A)", exercises).unwrap()
    }

    fn lower_a() -> Template {
        let exercises = vec![
            ExerciseDefinition::new("Hack", 4, "8-12").unwrap(),
            ExerciseDefinition::new("Voador", 2, "10-15").unwrap(),
        ];
        Template::new(TemplateId::new("b"), "Lower A", "(B)", exercises).unwrap()
    }

    #[test]
    fn draft_matches_template_shape() {
        let template = upper_a();
        let draft = SessionDraft::from_template(Some(&template));

        let names: Vec<&str> = draft.exercise_names().collect();
        let expected: Vec<&str> = template.exercises().iter().map(|e| e.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(draft.len(), 7);
        assert_eq!(draft.total_entries(), 20);
        for exercise in template.exercises() {
            let sets = draft.sets(exercise.name()).unwrap();
            assert_eq!(sets.len(), exercise.sets() as usize);
            assert!(sets.iter().all(SetEntry::is_blank));
        }
    }

    #[test]
    fn missing_template_yields_empty_draft() {
        let draft = SessionDraft::from_template(None);
        assert!(draft.is_empty());
        assert_eq!(draft.total_entries(), 0);
    }

    #[test]
    fn reselecting_discards_previous_entries() {
        let first = SessionDraft::from_template(Some(&upper_a()))
            .edit_field("Voador", 0, SetField::Weight, "30")
            .unwrap();
        assert_eq!(first.entry("Voador", 0).unwrap().weight, "30");

        let second = SessionDraft::from_template(Some(&lower_a()));
        assert!(!second.contains("Puxada Alta"));
        // Shared exercise names start over, sized by the new template.
        assert_eq!(second.sets("Voador").unwrap(), &[SetEntry::default(), SetEntry::default()]);
    }

    #[test]
    fn edit_changes_only_target_entry() {
        let draft = SessionDraft::from_template(Some(&upper_a()));
        let edited = draft
            .edit_field("Supino Inclinado (halter)", 1, SetField::Weight, "40")
            .unwrap();

        let mut changed = 0;
        for (name, sets) in edited.iter() {
            for (idx, entry) in sets.iter().enumerate() {
                if draft.entry(name, idx) != Some(entry) {
                    changed += 1;
                }
            }
        }
        assert_eq!(changed, 1);
        assert_eq!(
            edited.entry("Supino Inclinado (halter)", 1),
            Some(&SetEntry::new("", "40"))
        );
        // The source draft is untouched.
        assert!(draft.entry("Supino Inclinado (halter)", 1).unwrap().is_blank());
    }

    #[test]
    fn edit_is_idempotent() {
        let draft = SessionDraft::from_template(Some(&upper_a()));
        let once = draft.edit_field("Voador", 2, SetField::Reps, "10").unwrap();
        let twice = once.edit_field("Voador", 2, SetField::Reps, "10").unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("Agachamento", 0)]
    #[case("Voador", 3)]
    #[case("Supino Inclinado (halter)", 2)]
    fn invalid_references_are_reported(#[case] exercise: &str, #[case] index: usize) {
        let draft = SessionDraft::from_template(Some(&upper_a()));
        assert!(draft.edit_field(exercise, index, SetField::Reps, "8").is_err());
        assert!(draft.copy_previous(exercise, index).is_err());
    }

    #[test]
    fn out_of_range_error_carries_bounds() {
        let draft = SessionDraft::from_template(Some(&upper_a()));
        let err = draft
            .edit_field("Supino Inclinado (halter)", 5, SetField::Weight, "1")
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::SetOutOfRange {
                exercise: "Supino Inclinado (halter)".into(),
                index: 5,
                len: 2,
            }
        );
    }

    #[test]
    fn copy_first_set_is_noop() {
        let draft = SessionDraft::from_template(Some(&upper_a()))
            .edit_field("Voador", 0, SetField::Weight, "25")
            .unwrap();
        assert_eq!(draft.copy_previous("Voador", 0).unwrap(), draft);
    }

    #[test]
    fn copy_takes_values_from_previous_set() {
        let draft = SessionDraft::from_template(Some(&upper_a()))
            .edit_field("Supino Inclinado (halter)", 0, SetField::Weight, "40")
            .and_then(|d| d.edit_field("Supino Inclinado (halter)", 0, SetField::Reps, "10"))
            .and_then(|d| d.edit_field("Supino Inclinado (halter)", 1, SetField::Reps, "6"))
            .unwrap();

        let copied = draft.copy_previous("Supino Inclinado (halter)", 1).unwrap();

        assert_eq!(
            copied.entry("Supino Inclinado (halter)", 1),
            Some(&SetEntry::new("10", "40"))
        );
        assert_eq!(
            copied.entry("Supino Inclinado (halter)", 0),
            draft.entry("Supino Inclinado (halter)", 0)
        );
    }

    #[test]
    fn copy_chains_down_the_sets() {
        let draft = SessionDraft::from_template(Some(&upper_a()))
            .edit_field("Voador", 0, SetField::Weight, "20")
            .unwrap();
        let copied = draft
            .copy_previous("Voador", 1)
            .and_then(|d| d.copy_previous("Voador", 2))
            .unwrap();
        assert!(copied.sets("Voador").unwrap().iter().all(|s| s.weight == "20"));
    }

    #[test]
    fn finalized_record_is_detached_from_draft() {
        let draft = SessionDraft::from_template(Some(&upper_a()))
            .edit_field("Voador", 0, SetField::Weight, "30")
            .unwrap();
        let record = draft.finalize(TemplateId::new("a"), fixed_now());

        let later = draft.edit_field("Voador", 0, SetField::Weight, "99").unwrap();

        assert_eq!(later.entry("Voador", 0).unwrap().weight, "99");
        assert_eq!(record.entries()["Voador"][0].weight, "30");
        assert_eq!(record.entries().len(), 7);
    }

    #[test]
    fn finalize_two_exercise_template() {
        let template = Template::new(
            TemplateId::new("a"),
            "Mini",
            "",
            vec![
                ExerciseDefinition::new("Hack", 2, "8-12").unwrap(),
                ExerciseDefinition::new("Stiff", 1, "10-15").unwrap(),
            ],
        )
        .unwrap();
        let draft = SessionDraft::from_template(Some(&template))
            .edit_field("Hack", 0, SetField::Weight, "80")
            .and_then(|d| d.edit_field("Stiff", 0, SetField::Reps, "12"))
            .unwrap();

        let record = draft.finalize(TemplateId::new("a"), fixed_now());

        assert_eq!(record.template_id().as_str(), "a");
        assert_eq!(record.entries().keys().collect::<Vec<_>>(), vec!["Hack", "Stiff"]);
        assert!(DateTime::parse_from_rfc3339(&record.date_iso()).is_ok());
    }

    #[test]
    fn duplicate_exercise_names_collapse_to_one_key() {
        let template = Template::new(
            TemplateId::new("x"),
            "Dup",
            "",
            vec![
                ExerciseDefinition::new("Hack", 2, "8-12").unwrap(),
                ExerciseDefinition::new("Stiff", 3, "10-15").unwrap(),
                ExerciseDefinition::new("Hack", 4, "8-12").unwrap(),
            ],
        )
        .unwrap();
        let draft = SessionDraft::from_template(Some(&template));

        assert_eq!(draft.exercise_names().collect::<Vec<_>>(), vec!["Hack", "Stiff"]);
        assert_eq!(draft.sets("Hack").map(<[SetEntry]>::len), Some(4));
    }

    #[test]
    fn set_field_parses_case_insensitively() {
        assert_eq!("Weight".parse::<SetField>(), Ok(SetField::Weight));
        assert_eq!("reps".parse::<SetField>(), Ok(SetField::Reps));
        assert!("kg".parse::<SetField>().is_err());
    }
}
