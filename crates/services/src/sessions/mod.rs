mod log;
mod state;

// Public API of the session logging subsystem.
pub use crate::error::SessionLogError;
pub use log::SessionLogService;
pub use state::DraftState;
