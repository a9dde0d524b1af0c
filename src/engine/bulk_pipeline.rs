use std::path::{Path, PathBuf};

use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::engine::PipelineError;
use crate::ingest::{read_source, CsvParser, ParsedBatch, RowRejection};
use crate::models::{BatchStats, PredictionResult};
use crate::results::classify;
use crate::scoring::{BatchSubmitter, ScoringService};

/// The single completion event of a bulk upload.
#[derive(Debug)]
pub struct BulkOutcome {
    /// Classified results, in the order the service returned them.
    pub results: Vec<PredictionResult>,
    pub stats: BatchStats,
    /// Rows dropped during parsing; they were never submitted.
    pub rejected: Vec<RowRejection>,
    pub submitted: usize
}

/// Reads and parses an uploaded file off the async runtime.
pub async fn load_batch(path: &Path, max_file_bytes: u64) -> Result<ParsedBatch, PipelineError> {
    let path: PathBuf = path.to_path_buf();
    let parser = CsvParser::new();

    let batch = spawn_blocking(move || {
        let content = read_source(&path, max_file_bytes)?;
        parser.parse(&content)
    }).await??;

    Ok(batch)
}

/// Parse, validate, submit and classify one uploaded batch.
pub struct BulkPipeline<S> {
    parser: CsvParser,
    submitter: BatchSubmitter<S>,
    max_file_bytes: u64
}

impl<S: ScoringService> BulkPipeline<S> {
    pub fn new(service: S, config: &ClientConfig) -> Self {
        Self {
            parser: CsvParser::new(),
            submitter: BatchSubmitter::new(service).with_max_batch_size(config.max_batch_size),
            max_file_bytes: config.max_file_bytes
        }
    }

    /// Runs the whole pipeline for a file on disk.
    pub async fn run_file(&self, path: &Path, email: &str) -> Result<BulkOutcome, PipelineError> {
        let path = path.to_path_buf();
        let max_file_bytes = self.max_file_bytes;

        let content = spawn_blocking(move || read_source(&path, max_file_bytes)).await??;

        self.run(&content, email).await
    }

    /// Runs the whole pipeline for CSV text already in memory.
    pub async fn run(&self, content: &str, email: &str) -> Result<BulkOutcome, PipelineError> {
        let batch = self.parser.parse(content)?;
        self.score(batch, email).await
    }

    async fn score(&self, batch: ParsedBatch, email: &str) -> Result<BulkOutcome, PipelineError> {
        let ParsedBatch { transactions, rejected } = batch;

        info!("Found [{}] transactions ([{}] rows skipped). Processing...", transactions.len(), rejected.len());

        let data = self.submitter.submit(&transactions, email).await?;
        let results: Vec<PredictionResult> = data.results.iter().map(classify).collect();

        debug!("Classified [{}] results for [{}] submitted transactions", results.len(), transactions.len());

        Ok(BulkOutcome {
            results,
            stats: data.stats,
            rejected,
            submitted: transactions.len()
        })
    }
}
