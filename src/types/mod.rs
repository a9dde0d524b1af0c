mod channel;
mod errors;

pub use channel::Channel;
pub use errors::ChannelError;

pub type CustomerId = String;
pub type TransactionId = String;

/// Rows stay in a single batch up to this size.
pub const MAX_BATCH_SIZE: usize = 1000;
