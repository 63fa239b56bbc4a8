//! Submission of the search form to the aggregation endpoint

mod client;
mod error;
mod submitter;
mod traits;

pub use client::HttpSubmitClient;
pub use error::SubmitError;
pub use submitter::{spawn_submission, SubmissionOutcome};
pub use traits::SubmitClientTrait;

#[cfg(test)]
pub use traits::MockSubmitClientTrait;
#[cfg(test)]
pub use error::HTTP_FAILURE_MESSAGE;
