use std::fmt;

/// Lifecycle of the draft held by `SessionLogService`.
///
/// `Finalized` is transient: `submit` hands the record off and the service
/// drops straight back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Populated,
}

impl DraftState {
    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(self) -> bool {
        matches!(self, DraftState::Populated)
    }
}

impl fmt::Display for DraftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftState::Empty => f.write_str("empty"),
            DraftState::Populated => f.write_str("populated"),
        }
    }
}
