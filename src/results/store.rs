use tracing::debug;

use crate::models::{BatchStats, PredictionResult, ResultStatus};

/// Counts over the full result set, independent of the active filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub legitimate: usize,
    pub risky: usize,
    pub fraud: usize,
    pub errors: usize
}

/// Session-scoped holder of the last classified batch.
///
/// The full set is only ever replaced wholesale; filtering derives a view from
/// it and never changes it.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Vec<PredictionResult>,
    stats: Option<BatchStats>,
    filter: Option<ResultStatus>
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored batch and drops any active filter.
    pub fn replace(&mut self, results: Vec<PredictionResult>, stats: BatchStats) {
        debug!("Storing [{}] classified results", results.len());

        self.clear();
        self.results = results;
        self.stats = Some(stats);
    }

    pub fn clear(&mut self) {
        self.results.clear();
        self.stats = None;
        self.filter = None;
    }

    pub fn set_filter(&mut self, filter: Option<ResultStatus>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Option<ResultStatus> {
        self.filter
    }

    pub fn stats(&self) -> Option<&BatchStats> {
        self.stats.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results matching the active filter exactly, or all of them when unfiltered.
    pub fn filtered(&self) -> Vec<&PredictionResult> {
        self.results.iter()
            .filter(|result| self.filter.is_none_or(|status| result.status == status))
            .collect()
    }

    /// Looks a single result up by transaction id, filter or not.
    pub fn find(&self, transaction_id: &str) -> Option<&PredictionResult> {
        self.results.iter().find(|result| result.transaction_id == transaction_id)
    }

    pub fn summary(&self) -> Summary {
        self.results.iter().fold(Summary { total: self.results.len(), ..Summary::default() }, |mut summary, result| {
            match result.status {
                ResultStatus::Legitimate => summary.legitimate += 1,
                ResultStatus::Risky => summary.risky += 1,
                ResultStatus::Fraud => summary.fraud += 1,
                ResultStatus::Error => summary.errors += 1
            }
            summary
        })
    }
}
