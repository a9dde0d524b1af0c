use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::ingest::{IngestError, RawRow, RejectReason, RowRejection, TransactionValidator};
use crate::models::Transaction;

/// Columns a file must name in its header, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "customer_id",
    "transaction_amount",
    "kyc_verified",
    "account_age_days",
    "channel_encoded",
    "transaction_datetime"
];

/// Outcome of parsing one file: the accepted batch and a note for every dropped row.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub transactions: Vec<Transaction>,
    pub rejected: Vec<RowRejection>
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    validator: TransactionValidator
}

impl CsvParser {
    pub fn new() -> Self {
        Self {
            validator: TransactionValidator::new()
        }
    }

    /// Parses the full text of an uploaded CSV file.
    ///
    /// Malformed rows are dropped and reported in [`ParsedBatch::rejected`]; they
    /// never stop the rows that follow.
    ///
    /// # Errors
    /// - `EmptyInput` if there is no header or no data row.
    /// - `MissingColumns` if the header lacks a required column.
    /// - `NoValidRows` if every data row was dropped.
    pub fn parse(&self, content: &str) -> Result<ParsedBatch, IngestError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();

        for result in reader.records() {
            let record = result?;

            if !Self::is_blank(&record) {
                records.push(record);
            }
        }

        let Some((headers, rows)) = records.split_first() else {
            return Err(IngestError::EmptyInput)
        };

        if rows.is_empty() {
            return Err(IngestError::EmptyInput)
        }

        Self::check_required_columns(headers)?;

        let mut batch = ParsedBatch::default();

        for (offset, record) in rows.iter().enumerate() {
            let row = offset + 1;

            match self.parse_row(headers, record, row) {
                Ok(transaction) => batch.transactions.push(transaction),
                Err(reason) => {
                    warn!("Skipping invalid row [{row}]: {reason}");
                    batch.rejected.push(RowRejection { row, reason });
                }
            }
        }

        if batch.transactions.is_empty() {
            return Err(IngestError::NoValidRows { rejected: batch.rejected.len() })
        }

        debug!("Parsed [{}] transactions, rejected [{}] rows", batch.transactions.len(), batch.rejected.len());

        Ok(batch)
    }

    /// Empty lines never reach us; a whitespace-only line trims down to one empty field.
    /// Delimiter-only lines like `,,,` are not blank and go through validation.
    fn is_blank(record: &StringRecord) -> bool {
        record.len() == 1 && record.get(0).is_some_and(str::is_empty)
    }

    fn check_required_columns(headers: &StringRecord) -> Result<(), IngestError> {
        let missing: Vec<String> = REQUIRED_COLUMNS.iter()
            .filter(|column| !headers.iter().any(|header| header == **column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(IngestError::MissingColumns { columns: missing })
        }

        Ok(())
    }

    fn parse_row(&self, headers: &StringRecord, record: &StringRecord, row: usize) -> Result<Transaction, RejectReason> {
        if record.len() != headers.len() {
            return Err(RejectReason::ColumnCountMismatch { expected: headers.len(), found: record.len() })
        }

        let raw = RawRow::from_record(headers, record);

        Ok(self.validator.validate(&raw, row)?)
    }
}
