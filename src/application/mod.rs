//! Application layer - Form sessions and draft persistence.
//!
//! This layer owns form state for the duration of an edit and coordinates
//! the domain rules with the storage and remote API ports.

mod autosave;
mod draft_manager;
mod form_session;

pub use autosave::Autosave;
pub use draft_manager::DraftManager;
pub use form_session::{
    FieldChange, FormSession, RecoveryChoice, RecoveryPrompt, SessionError, SubmitError,
};
