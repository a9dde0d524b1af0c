use tracing::{error, info};

use crate::models::Transaction;
use crate::scoring::{BulkPredictData, BulkPredictRequest, ScoringService, SubmissionError};
use crate::types::MAX_BATCH_SIZE;

/// Packages a validated batch into a single scoring request.
pub struct BatchSubmitter<S> {
    service: S,
    max_batch_size: usize
}

impl<S: ScoringService> BatchSubmitter<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            max_batch_size: MAX_BATCH_SIZE
        }
    }

    /// Lowers the batch ceiling. It can never be raised above [`MAX_BATCH_SIZE`].
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.min(MAX_BATCH_SIZE);
        self
    }

    /// Submits the whole batch in one request.
    ///
    /// # Errors
    /// `BatchTooLarge` is returned before anything is sent; any other
    /// `SubmissionError` comes from the service.
    pub async fn submit(&self, transactions: &[Transaction], email: &str) -> Result<BulkPredictData, SubmissionError> {
        if transactions.len() > self.max_batch_size {
            return Err(SubmissionError::BatchTooLarge { size: transactions.len(), limit: self.max_batch_size });
        }

        info!("Submitting [{}] transactions for scoring", transactions.len());

        let request = BulkPredictRequest { email, transactions };

        self.service.bulk_predict(&request).await
            .inspect_err(|error| error!("Bulk prediction failed: {error}"))
    }
}
