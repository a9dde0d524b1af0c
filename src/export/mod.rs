mod errors;
mod rows;
mod sample;
mod writer;

pub use errors::ExportError;
pub use rows::{ReportRow, ResultRow};
pub(crate) use rows::percent;
pub use sample::sample_transactions;
pub use writer::{default_export_filename, export_results, write_csv, ExportFormat};
