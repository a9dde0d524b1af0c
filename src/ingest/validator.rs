use crate::ingest::id::synthesize_transaction_id;
use crate::ingest::RawRow;
use crate::models::{Transaction, ValidationError};
use crate::types::Channel;

/// Turns a raw row into a [`Transaction`], enforcing per-field type and range rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionValidator;

impl TransactionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates one row.
    ///
    /// `row_index` is only used for diagnostics and for synthesizing a
    /// `transaction_id` when the row has none.
    ///
    /// # Errors
    /// Returns the first `ValidationError` found, checking fields in this order:
    /// customer, datetime, amount, kyc, account age, channel.
    pub fn validate(&self, row: &RawRow, row_index: usize) -> Result<Transaction, ValidationError> {
        let customer_id = row.get("customer_id")
            .ok_or_else(|| ValidationError::missing(row_index, "customer_id"))?;

        let transaction_datetime = row.get("transaction_datetime")
            .ok_or_else(|| ValidationError::missing(row_index, "transaction_datetime"))?;

        let transaction_amount = Self::amount(row, row_index)?;

        let kyc_verified = match Self::integer(row, row_index, "kyc_verified")? {
            value @ (0 | 1) => value as u8,
            _ => return Err(Self::range_error(row, row_index, "kyc_verified", "0 or 1"))
        };

        let account_age_days = match Self::integer(row, row_index, "account_age_days")? {
            age if age < 0 => return Err(Self::range_error(row, row_index, "account_age_days", "a non-negative integer")),
            age => u32::try_from(age)
                .map_err(|_| Self::range_error(row, row_index, "account_age_days", "at most 4294967295"))?
        };

        let channel = Channel::from_code(Self::integer(row, row_index, "channel_encoded")?)
            .map_err(|_| Self::range_error(row, row_index, "channel_encoded", "between 0 and 3"))?;

        let transaction_id = match row.get("transaction_id") {
            Some(transaction_id) => transaction_id.to_string(),
            None => synthesize_transaction_id(row_index)
        };

        Ok(Transaction {
            customer_id: customer_id.to_string(),
            transaction_id,
            transaction_amount,
            kyc_verified,
            account_age_days,
            channel,
            transaction_datetime: transaction_datetime.to_string()
        })
    }

    fn amount(row: &RawRow, row_index: usize) -> Result<f64, ValidationError> {
        let raw = row.get("transaction_amount")
            .ok_or_else(|| ValidationError::missing(row_index, "transaction_amount"))?;

        let amount: f64 = raw.parse()
            .map_err(|_| ValidationError::invalid_number(row_index, "transaction_amount", raw))?;

        if !amount.is_finite() {
            return Err(ValidationError::non_finite(row_index, "transaction_amount", raw));
        }

        Ok(amount)
    }

    fn integer(row: &RawRow, row_index: usize, field: &'static str) -> Result<i64, ValidationError> {
        let raw = row.get(field)
            .ok_or_else(|| ValidationError::missing(row_index, field))?;

        raw.parse()
            .map_err(|_| ValidationError::invalid_number(row_index, field, raw))
    }

    fn range_error(row: &RawRow, row_index: usize, field: &'static str, expected: &'static str) -> ValidationError {
        ValidationError::out_of_range(row_index, field, row.get(field).unwrap_or_default(), expected)
    }
}
