use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Maximum {limit} transactions allowed per request, got [{size}]")]
    BatchTooLarge {
        size: usize,
        limit: usize
    },
    #[error("Scoring service responded with HTTP [{status}]: {message}")]
    Http {
        status: u16,
        message: String
    },
    #[error("{message}")]
    Rejected {
        message: String
    },
    #[error("Scoring service returned no data")]
    MissingData,
    #[error("Unable to reach scoring service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unable to decode scoring service response: {0}")]
    Decode(#[from] serde_json::Error)
}
