use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{BatchStats, RawResult, Transaction};
use crate::scoring::SubmissionError;

/// Body of `POST /api/bulk-predict`.
#[derive(Debug, Clone, Serialize)]
pub struct BulkPredictRequest<'a> {
    pub email: &'a str,
    pub transactions: &'a [Transaction]
}

/// Body of `POST /api/predict`: the identity plus the transaction fields inline.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub email: &'a str,
    #[serde(flatten)]
    pub transaction: &'a Transaction
}

/// The `data` payload of a successful bulk prediction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BulkPredictData {
    #[serde(default)]
    pub results: Vec<RawResult>,
    #[serde(flatten)]
    pub stats: BatchStats
}

/// The remote scoring service. One call per request, never retried.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn bulk_predict(&self, request: &BulkPredictRequest<'_>) -> Result<BulkPredictData, SubmissionError>;
    async fn predict(&self, request: &PredictRequest<'_>) -> Result<RawResult, SubmissionError>;
}
