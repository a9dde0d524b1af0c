use std::io::Write;

use chrono::Utc;
use clap::ValueEnum;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use crate::export::{ExportError, ReportRow, ResultRow};
use crate::models::PredictionResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Readable column titles, channel names and percentages.
    #[default]
    Report,
    /// Raw field names and values, re-importable.
    Raw
}

/// Writes uniform records as comma separated text and returns how many were written.
///
/// The header comes from the record field names. Values containing a comma, a
/// quote or a line break are quoted.
pub fn write_csv<W: Write, R: Serialize>(writer: W, records: &[R]) -> Result<usize, ExportError> {
    if records.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(records.len())
}

pub fn export_results<W: Write>(writer: W, results: &[&PredictionResult], format: ExportFormat) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Report => {
            let rows: Vec<ReportRow> = results.iter().map(|result| ReportRow::from(*result)).collect();
            write_csv(writer, &rows)
        }
        ExportFormat::Raw => {
            let rows: Vec<ResultRow> = results.iter().map(|result| ResultRow::from(*result)).collect();
            write_csv(writer, &rows)
        }
    }
}

pub fn default_export_filename() -> String {
    format!("bulk_predictions_{}.csv", Utc::now().format("%Y-%m-%d"))
}
