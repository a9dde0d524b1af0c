mod bulk_pipeline;
mod errors;

pub use bulk_pipeline::{load_batch, BulkPipeline};
pub use errors::PipelineError;
