//! Submission Reader Port - Loads a previously submitted record for editing.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::SubmissionId;

use super::GatewayError;

/// Port for fetching stored records
#[async_trait]
pub trait SubmissionReader: Send + Sync {
    /// Fetch the raw record; `None` if no record has this id
    async fn fetch(&self, id: SubmissionId) -> Result<Option<Value>, GatewayError>;
}
