//! Submission workflow: send the payload and reduce the result to an outcome

use super::{SubmitClientTrait, SubmitError};
use crate::state::SubmissionPayload;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of one submission as the form sees it
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Parsed JSON body of a success response
    Succeeded(serde_json::Value),
    /// Message for the form's error slot
    Failed(String),
}

/// Send `payload` through `client` and map the result to an outcome.
///
/// Never fails: every error becomes a user-readable message.
pub async fn submit(client: &dyn SubmitClientTrait, payload: &SubmissionPayload) -> SubmissionOutcome {
    tracing::info!(
        url = %payload.url,
        neighborhoods = payload.params.nh.len(),
        title = %payload.notion_db_title,
        "Submitting search"
    );

    match client.submit(payload).await {
        Ok(response) => {
            tracing::info!(%response, "Data submitted successfully");
            SubmissionOutcome::Succeeded(response)
        }
        Err(err) => {
            match &err {
                SubmitError::Status { status, body } => {
                    tracing::warn!(status, %body, "Endpoint rejected submission");
                }
                other => tracing::warn!(error = %other, "Submission failed"),
            }
            SubmissionOutcome::Failed(err.user_message())
        }
    }
}

/// Run [`submit`] on a background task and deliver the outcome on `tx`
pub fn spawn_submission(
    client: Arc<dyn SubmitClientTrait>,
    payload: SubmissionPayload,
    tx: mpsc::UnboundedSender<SubmissionOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = submit(client.as_ref(), &payload).await;
        if tx.send(outcome).is_err() {
            tracing::debug!("Submission finished after the UI shut down");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchParams;
    use crate::submit::MockSubmitClientTrait;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            url: "http://x".to_string(),
            params: SearchParams {
                nh: vec!["A".to_string(), "C".to_string()],
            },
            notion_db_title: "T".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_returns_response() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit()
            .times(1)
            .withf(|p| p.params.nh == vec!["A".to_string(), "C".to_string()])
            .returning(|_| Ok(json!({"ok": true})));

        let outcome = submit(&mock, &payload()).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded(json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_http_failure_uses_fixed_message() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit().times(1).returning(|_| {
            Err(SubmitError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let outcome = submit(&mock, &payload()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("Submission failed. Please try again.".to_string())
        );
    }

    #[tokio::test]
    async fn test_network_failure_embeds_description() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::Network("timeout".to_string())));

        let outcome = submit(&mock, &payload()).await;

        assert_eq!(outcome, SubmissionOutcome::Failed("Error: timeout".to_string()));
    }

    #[test]
    fn test_decode_failure_embeds_description() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(SubmitError::Decode("trailing characters".to_string())));

        let outcome = tokio_test::block_on(submit(&mock, &payload()));

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed("Error: trailing characters".to_string())
        );
    }

    #[tokio::test]
    async fn test_spawn_delivers_outcome_on_channel() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Ok(json!({"queued": 3})));
        let client: Arc<dyn SubmitClientTrait> = Arc::new(mock);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_submission(client, payload(), tx).await.unwrap();

        assert_eq!(
            rx.recv().await,
            Some(SubmissionOutcome::Succeeded(json!({"queued": 3})))
        );
    }

    #[tokio::test]
    async fn test_spawn_tolerates_closed_channel() {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit().returning(|_| Ok(json!({})));
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let handle = spawn_submission(Arc::new(mock), payload(), tx);

        assert!(handle.await.is_ok());
    }
}
