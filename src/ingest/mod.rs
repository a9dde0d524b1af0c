mod errors;
mod id;
mod parser;
mod row;
mod source;
#[cfg(test)]
mod tests;
mod validator;

pub use errors::{IngestError, RejectReason, RowRejection};
pub use parser::{CsvParser, ParsedBatch};
pub use row::RawRow;
pub use source::read_source;
pub use validator::TransactionValidator;
