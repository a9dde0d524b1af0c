use serde::{Deserialize, Serialize};

use crate::types::{Channel, CustomerId, TransactionId};

/// A validated transaction, ready to be scored.
///
/// Field names double as the CSV column names and the JSON keys the scoring
/// service expects, so the same struct serves for import, the request body and
/// the sample file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer_id: CustomerId,
    pub transaction_id: TransactionId,
    pub transaction_amount: f64,
    /// Either 0 or 1.
    pub kyc_verified: u8,
    pub account_age_days: u32,
    #[serde(rename = "channel_encoded")]
    pub channel: Channel,
    /// Opaque timestamp, forwarded as given.
    pub transaction_datetime: String
}
