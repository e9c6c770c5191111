//! Submission Gateway Port - Interface to the remote API that stores records.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::SubmissionId;

/// Errors reported by the remote API
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    #[error("Network error: {0}")]
    Network(String),
}

/// Port for submitting finished forms
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Create a new record and return its id
    async fn create(&self, record: Value) -> Result<SubmissionId, GatewayError>;

    /// Replace an existing record
    async fn update(&self, id: SubmissionId, record: Value) -> Result<(), GatewayError>;
}
