use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::draft::SetEntry;
use crate::model::ids::TemplateId;

/// Finalized, immutable snapshot of a logged workout session.
///
/// Serializes as `{"templateId", "date", "entries"}` with an RFC 3339 date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    template_id: TemplateId,
    date: DateTime<Utc>,
    entries: BTreeMap<String, Vec<SetEntry>>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(
        template_id: TemplateId,
        date: DateTime<Utc>,
        entries: BTreeMap<String, Vec<SetEntry>>,
    ) -> Self {
        Self {
            template_id,
            date,
            entries,
        }
    }

    #[must_use]
    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
    #[must_use]
    pub fn date_iso(&self) -> String {
        self.date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, Vec<SetEntry>> {
        &self.entries
    }

    /// Number of sets with at least one field filled in.
    #[must_use]
    pub fn filled_sets(&self) -> usize {
        self.entries
            .values()
            .flatten()
            .filter(|entry| !entry.is_blank())
            .count()
    }
}
