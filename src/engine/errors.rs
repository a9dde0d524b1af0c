use thiserror::Error;
use tokio::task::JoinError;

use crate::ingest::IngestError;
use crate::models::ValidationError;
use crate::scoring::SubmissionError;

/// Anything that aborts a prediction request as a whole.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("Background task failed: {0}")]
    Task(#[from] JoinError)
}
