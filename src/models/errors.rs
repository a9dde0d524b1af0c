use crate::types::ChannelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Field [{field}] is required for row [{row}]")]
    MissingField {
        row: usize,
        field: &'static str
    },
    #[error("Field [{field}] has a non-numeric value [{value}] for row [{row}]")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String
    },
    #[error("Field [{field}] has a non-finite value [{value}] for row [{row}]")]
    NonFinite {
        row: usize,
        field: &'static str,
        value: String
    },
    #[error("Field [{field}] value [{value}] must be {expected} for row [{row}]")]
    OutOfRange {
        row: usize,
        field: &'static str,
        value: String,
        expected: &'static str
    },
    #[error("Channel is invalid for row [{row}]: {source}")]
    UnknownChannel {
        row: usize,
        source: ChannelError
    }
}

impl ValidationError {
    pub fn missing(row: usize, field: &'static str) -> Self {
        Self::MissingField { row, field }
    }

    pub fn invalid_number(row: usize, field: &'static str, value: &str) -> Self {
        Self::InvalidNumber { row, field, value: value.to_string() }
    }

    pub fn non_finite(row: usize, field: &'static str, value: &str) -> Self {
        Self::NonFinite { row, field, value: value.to_string() }
    }

    pub fn out_of_range(row: usize, field: &'static str, value: &str, expected: &'static str) -> Self {
        Self::OutOfRange { row, field, value: value.to_string(), expected }
    }

    pub fn unknown_channel(row: usize, source: ChannelError) -> Self {
        Self::UnknownChannel { row, source }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Status [{0}] is not one of Error, Fraud, Risky, Legitimate")]
pub struct StatusParseError(pub String);
