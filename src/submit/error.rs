//! Errors raised while talking to the aggregation endpoint

use std::error::Error as StdError;
use thiserror::Error;

/// Message shown for any non-success HTTP status
pub const HTTP_FAILURE_MESSAGE: &str = "Submission failed. Please try again.";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("endpoint responded with HTTP {status}")]
    Status { status: u16, body: String },

    /// Connection, TLS or timeout failure before a response was read
    #[error("{0}")]
    Network(String),

    /// The success response body was not valid JSON
    #[error("{0}")]
    Decode(String),
}

impl SubmitError {
    /// Text placed in the form's error slot
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { .. } => HTTP_FAILURE_MESSAGE.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        let message = describe(&err);
        if err.is_decode() {
            Self::Decode(message)
        } else {
            Self::Network(message)
        }
    }
}

/// Flatten an error and its sources into one line
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
