use tracing::info;

use crate::engine::PipelineError;
use crate::scoring::{PredictRequest, ScoringService};
use crate::single::{PredictionReport, SingleInput};

/// Scores one transaction through `POST /api/predict`.
pub struct SinglePredictor<S> {
    service: S
}

impl<S: ScoringService> SinglePredictor<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub async fn predict(&self, input: &SingleInput, email: &str) -> Result<PredictionReport, PipelineError> {
        let transaction = input.to_transaction()?;

        info!("Analyzing transaction [{}] for customer [{}]", transaction.transaction_id, transaction.customer_id);

        let raw = self.service.predict(&PredictRequest { email, transaction: &transaction }).await?;

        Ok(PredictionReport::new(&raw, &transaction, email))
    }
}
