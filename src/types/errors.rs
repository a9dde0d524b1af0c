use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Channel error: code [{0}] must be between 0 and 3")]
    UnknownCode(i64),
    #[error("Channel error: [{0}] is not one of Online, ATM, POS, Mobile")]
    UnknownName(String)
}
