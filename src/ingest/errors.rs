use thiserror::Error;

use crate::models::ValidationError;

/// File level failures. Any of these aborts the whole upload.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV file is empty or invalid")]
    EmptyInput,
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns {
        columns: Vec<String>
    },
    #[error("No valid transactions found after parsing ({rejected} rows rejected)")]
    NoValidRows {
        rejected: usize
    },
    #[error("File size [{size}] bytes exceeds the [{limit}] byte limit")]
    FileSizeExceeded {
        size: u64,
        limit: u64
    },
    #[error("Please upload a valid CSV file: [{path}]")]
    UnsupportedFile {
        path: String
    },
    #[error("Unable to read CSV source: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error)
}

/// Why a single data row was left out of the batch.
#[derive(Debug, Error, PartialEq)]
pub enum RejectReason {
    #[error("column count mismatch, expected [{expected}] found [{found}]")]
    ColumnCountMismatch {
        expected: usize,
        found: usize
    },
    #[error("{0}")]
    Invalid(#[from] ValidationError)
}

#[derive(Debug, PartialEq)]
pub struct RowRejection {
    /// 1-based index of the data row (the header is not counted).
    pub row: usize,
    pub reason: RejectReason
}
