use std::str::FromStr;

use chrono::{Local, NaiveDateTime};

use crate::ingest::{RawRow, TransactionValidator};
use crate::models::{Transaction, ValidationError};
use crate::types::Channel;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Fields entered for a one-off prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleInput {
    pub customer_id: String,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub kyc_verified: bool,
    pub account_age_days: i64,
    /// Channel name (Online, ATM, POS, Mobile) or its code.
    pub channel: String,
    pub datetime: Option<String>
}

impl SingleInput {
    /// Builds the transaction through the same validator as uploaded rows.
    ///
    /// # Errors
    /// `UnknownChannel` when the channel name is not in the channel table, or any
    /// error the row validator reports.
    pub fn to_transaction(&self) -> Result<Transaction, ValidationError> {
        let channel = Channel::from_str(&self.channel)
            .map_err(|error| ValidationError::unknown_channel(0, error))?;

        let mut row = RawRow::new()
            .with("customer_id", self.customer_id.as_str())
            .with("transaction_amount", self.amount.to_string())
            .with("kyc_verified", if self.kyc_verified { "1" } else { "0" })
            .with("account_age_days", self.account_age_days.to_string())
            .with("channel_encoded", channel.code().to_string())
            .with("transaction_datetime", normalize_datetime(self.datetime.as_deref()));

        if let Some(transaction_id) = &self.transaction_id {
            row = row.with("transaction_id", transaction_id.as_str());
        }

        TransactionValidator::new().validate(&row, 0)
    }
}

/// Brings a timestamp into `YYYY-MM-DD HH:MM:SS`.
///
/// `YYYY-MM-DDTHH:MM[:SS]` is reformatted, other text passes through untouched and
/// a missing value becomes the local current time.
pub fn normalize_datetime(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Local::now().format(DATETIME_FORMAT).to_string()
    };

    LOCAL_INPUT_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}
