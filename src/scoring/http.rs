use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::RawResult;
use crate::scoring::{BulkPredictData, BulkPredictRequest, PredictRequest, ScoringService, SubmissionError};

const BULK_PREDICT_PATH: &str = "/api/bulk-predict";
const PREDICT_PATH: &str = "/api/predict";

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    data: Option<T>
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
    #[serde(default)]
    message: Option<String>
}

/// [`ScoringService`] over HTTP/JSON.
pub struct HttpScoringClient {
    client: Client,
    base_url: String
}

impl HttpScoringClient {
    pub fn new(config: &ClientConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string()
        })
    }

    async fn post<B, T>(&self, path: &str, body: &B, failure: &str) -> Result<T, SubmissionError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("Scoring service answered [{status}] with [{}] bytes", text.len());

        if !status.is_success() {
            let message = Self::error_message(&text).unwrap_or_else(|| failure.to_string());
            return Err(SubmissionError::Http { status: status.as_u16(), message });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;

        if envelope.status != "success" {
            return Err(SubmissionError::Rejected {
                message: envelope.message.unwrap_or_else(|| failure.to_string())
            });
        }

        envelope.data.ok_or(SubmissionError::MissingData)
    }

    /// Pulls `detail` (FastAPI style, possibly structured) or `message` out of an error body.
    fn error_message(text: &str) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(text).ok()?;

        match body.detail {
            Some(Value::String(detail)) => Some(detail),
            Some(Value::Null) | None => body.message,
            Some(detail) => Some(detail.to_string())
        }
    }
}

#[async_trait]
impl ScoringService for HttpScoringClient {
    async fn bulk_predict(&self, request: &BulkPredictRequest<'_>) -> Result<BulkPredictData, SubmissionError> {
        self.post(BULK_PREDICT_PATH, request, "Bulk prediction failed").await
    }

    async fn predict(&self, request: &PredictRequest<'_>) -> Result<RawResult, SubmissionError> {
        self.post(PREDICT_PATH, request, "Prediction failed").await
    }
}
