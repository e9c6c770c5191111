//! FormSession - Owns one form's authoritative state.
//!
//! Wires the geographic cascade, Section C disclosure, progress and draft
//! persistence together. Every edit goes through [`FormSession::set_field`],
//! which applies the cascade, recomputes progress and reschedules the
//! autosave in that order.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::autosave::Autosave;
use super::draft_manager::DraftManager;
use crate::config::FormConfig;
use crate::domain::draft::{Draft, DraftKey, SessionMode};
use crate::domain::foundation::{SubmissionId, ValidationError};
use crate::domain::geography::{
    field_role, on_editable_array_changed, on_scope_changed, FieldRole, GeographyField,
};
use crate::domain::submission::{
    compute_progress, from_persisted_record, is_research_details_visible, to_api_record,
    validate_for_submit, FieldError, FieldValue, FormField, FormProgress, StudyForm,
};
use crate::ports::{DraftStorage, GatewayError, SubmissionGateway, SubmissionReader};

/// Errors from opening or editing a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A stored draft is waiting to be restored or discarded")]
    RecoveryPending,

    #[error("No draft recovery is pending")]
    NoRecoveryPending,

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    #[error("Failed to load submission: {0}")]
    Gateway(#[from] GatewayError),
}

/// Errors from submitting a session.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A stored draft is waiting to be restored or discarded")]
    RecoveryPending,

    #[error("Form has {} validation error(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Submission failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// The caller's answer to a pending draft recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryChoice {
    /// Delete the draft and keep the state the session was opened with.
    Discard,
    /// Replace the session state with the draft.
    Restore,
}

/// A stored draft found when the session opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryPrompt {
    /// When the draft was written; `None` if it could not be read.
    pub saved_at: Option<DateTime<Utc>>,
}

/// What a field edit did besides writing the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChange {
    pub field: FormField,
    /// The cascade rewrote at least one geography array.
    pub cascade_applied: bool,
    /// Section C switched between shown and hidden.
    pub research_details_toggled: bool,
}

pub struct FormSession {
    mode: SessionMode,
    form: StudyForm,
    progress: FormProgress,
    drafts: Arc<DraftManager>,
    autosave: Autosave,
    autosave_enabled: bool,
    recovery: Option<RecoveryPrompt>,
    /// The draft read at open, kept until the recovery choice is made.
    recovered: Option<Draft>,
}

impl FormSession {
    /// Opens a session over `initial`.
    ///
    /// If a draft exists under the session's key, edits are refused until
    /// [`resolve_recovery`](Self::resolve_recovery) is called.
    pub fn open(
        mode: SessionMode,
        initial: StudyForm,
        storage: Arc<dyn DraftStorage>,
        config: &FormConfig,
    ) -> Self {
        let key = DraftKey::for_session(&config.draft.key_prefix, mode);
        let drafts = Arc::new(DraftManager::new(storage, key));
        let autosave = Autosave::new(Arc::clone(&drafts), config.draft.debounce());

        let (recovery, recovered) = if drafts.has_draft() {
            let draft = drafts.load_draft();
            let prompt = RecoveryPrompt {
                saved_at: draft.as_ref().map(|d| d.saved_at),
            };
            (Some(prompt), draft)
        } else {
            (None, None)
        };
        if recovery.is_some() {
            info!(key = %drafts.key(), "Found stored draft, awaiting recovery choice");
        }

        let progress = progress_of(&initial);
        Self {
            mode,
            form: initial,
            progress,
            drafts,
            autosave,
            autosave_enabled: config.features.enable_autosave,
            recovery,
            recovered,
        }
    }

    /// Opens an edit session over a previously submitted record.
    pub async fn open_edit(
        reader: &dyn SubmissionReader,
        id: SubmissionId,
        storage: Arc<dyn DraftStorage>,
        config: &FormConfig,
    ) -> Result<Self, SessionError> {
        let record = reader
            .fetch(id)
            .await?
            .ok_or(SessionError::NotFound(id))?;
        let initial = from_persisted_record(record);
        Ok(Self::open(SessionMode::Edit(id), initial, storage, config))
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn draft_key(&self) -> &DraftKey {
        self.drafts.key()
    }

    pub fn form(&self) -> &StudyForm {
        &self.form
    }

    pub fn value(&self, field: FormField) -> FieldValue {
        self.form.get(field)
    }

    pub fn progress(&self) -> &FormProgress {
        &self.progress
    }

    pub fn is_research_details_visible(&self) -> bool {
        research_details_visible(&self.form)
    }

    /// Whether a geography array is user-editable, derived or unused right now.
    pub fn geography_role(&self, field: GeographyField) -> FieldRole {
        field_role(self.form.geographic_scope, field)
    }

    pub fn pending_recovery(&self) -> Option<RecoveryPrompt> {
        self.recovery
    }

    pub fn has_pending_autosave(&self) -> bool {
        self.autosave.has_pending()
    }

    /// Applies the caller's recovery choice.
    ///
    /// Returns true if the session state was replaced by the draft. A draft
    /// that cannot be read leaves the initial state in place.
    pub fn resolve_recovery(&mut self, choice: RecoveryChoice) -> Result<bool, SessionError> {
        if self.recovery.take().is_none() {
            return Err(SessionError::NoRecoveryPending);
        }
        let recovered = self.recovered.take();

        match choice {
            RecoveryChoice::Discard => {
                self.drafts.clear_draft();
                Ok(false)
            }
            RecoveryChoice::Restore => match recovered {
                Some(draft) => {
                    self.form = draft.form;
                    self.progress = progress_of(&self.form);
                    info!(key = %self.drafts.key(), saved_at = %draft.saved_at, "Draft restored");
                    Ok(true)
                }
                None => {
                    warn!(key = %self.drafts.key(), "Draft could not be restored, keeping initial state");
                    Ok(false)
                }
            },
        }
    }

    /// Writes one field and brings derived state up to date.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: FieldValue,
    ) -> Result<FieldChange, SessionError> {
        if self.recovery.is_some() {
            return Err(SessionError::RecoveryPending);
        }
        if let Some(geography) = field.geography_field() {
            if self.geography_role(geography) != FieldRole::Editable {
                return Err(FieldError::ReadOnly { field }.into());
            }
        }

        let was_visible = self.is_research_details_visible();
        let previous_scope = self.form.geographic_scope;
        self.form.set(field, value)?;

        let scope = self.form.geographic_scope;
        let cascade_applied = if field == FormField::GeographicScope {
            if scope == previous_scope {
                false
            } else {
                let before = self.form.geography.clone();
                self.form.geography = on_scope_changed(previous_scope, scope, &before);
                on_editable_array_changed(scope, &self.form.geography)
                    .apply(&mut self.form.geography);
                self.form.geography != before
            }
        } else if field.geography_field().is_some() {
            on_editable_array_changed(scope, &self.form.geography).apply(&mut self.form.geography)
        } else {
            false
        };

        self.progress = progress_of(&self.form);
        let research_details_toggled = was_visible != self.is_research_details_visible();

        if self.autosave_enabled {
            self.autosave.schedule(self.form.clone());
        }

        debug!(
            %field,
            cascade_applied,
            research_details_toggled,
            completed = self.progress.completed,
            total = self.progress.total,
            "Field updated"
        );
        Ok(FieldChange {
            field,
            cascade_applied,
            research_details_toggled,
        })
    }

    /// Validates and sends the form to the remote API.
    ///
    /// On success the pending autosave is cancelled and the draft removed.
    /// On failure the draft is left as it is.
    pub async fn submit(
        &mut self,
        gateway: &dyn SubmissionGateway,
    ) -> Result<SubmissionId, SubmitError> {
        if self.recovery.is_some() {
            return Err(SubmitError::RecoveryPending);
        }
        validate_for_submit(&self.form).map_err(SubmitError::Invalid)?;
        let record = to_api_record(&self.form)?;

        let result = match self.mode {
            SessionMode::Create => gateway.create(record).await,
            SessionMode::Edit(id) => gateway.update(id, record).await.map(|()| id),
        };

        match result {
            Ok(id) => {
                self.autosave.cancel();
                self.drafts.clear_draft();
                info!(submission_id = %id, "Submission saved");
                Ok(id)
            }
            Err(e) => {
                warn!(key = %self.drafts.key(), error = %e, "Submission failed, draft kept");
                Err(e.into())
            }
        }
    }

    /// Ends the session. A pending autosave is dropped, not flushed.
    pub fn close(mut self) {
        self.autosave.cancel();
        debug!(key = %self.drafts.key(), "Form session closed");
    }
}

fn research_details_visible(form: &StudyForm) -> bool {
    is_research_details_visible(form.causality_mode, form.method_class)
}

fn progress_of(form: &StudyForm) -> FormProgress {
    compute_progress(form, research_details_visible(form))
}
