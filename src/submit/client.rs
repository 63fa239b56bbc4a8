//! HTTP client for the aggregation endpoint
//!
//! Wraps a `reqwest::Client` configured with the request timeout and posts
//! the search form payload as JSON.

use super::{SubmitClientTrait, SubmitError};
use crate::config::SubmitConfig;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Client for the endpoint that kicks off a Craigslist to Notion import
pub struct HttpSubmitClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitClient {
    pub fn new(config: &SubmitConfig) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitClientTrait for HttpSubmitClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<serde_json::Value, SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = resp.json().await?;
        Ok(body)
    }
}
