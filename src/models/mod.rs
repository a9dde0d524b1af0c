mod errors;
mod result;
mod transaction;

pub use errors::ValidationError;
pub use result::{BatchStats, PredictionResult, RawResult, ResultStatus};
pub use transaction::Transaction;
