//! Trait abstraction for the submit client to enable mocking in tests

use super::SubmitError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// Sends a search form payload to the aggregation endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClientTrait: Send + Sync {
    /// POST the payload once and return the parsed JSON response body
    async fn submit(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, SubmitError>;
}
