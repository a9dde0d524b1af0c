use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No results to export")]
    Empty,
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unable to write export: {0}")]
    Io(#[from] std::io::Error)
}
