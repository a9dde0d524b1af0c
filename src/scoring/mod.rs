mod errors;
mod http;
mod service;
mod submitter;

pub use errors::SubmissionError;
pub use http::HttpScoringClient;
pub use service::{BulkPredictData, BulkPredictRequest, PredictRequest, ScoringService};
pub use submitter::BatchSubmitter;
