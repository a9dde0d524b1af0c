mod classifier;
mod store;

pub use classifier::{classify, classify_scored, RISKY_THRESHOLD};
pub use store::ResultStore;
