use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::errors::StatusParseError;

/// Closed set of outcomes a scored transaction is classified into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    Error,
    Fraud,
    Risky,
    Legitimate
}

impl ResultStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Error => "Error",
            ResultStatus::Fraud => "Fraud",
            ResultStatus::Risky => "Risky",
            ResultStatus::Legitimate => "Legitimate"
        }
    }
}

impl Display for ResultStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = StatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "error" => Ok(ResultStatus::Error),
            "fraud" => Ok(ResultStatus::Fraud),
            "risky" => Ok(ResultStatus::Risky),
            "legitimate" => Ok(ResultStatus::Legitimate),
            _ => Err(StatusParseError(value.to_string()))
        }
    }
}

/// Feature values the scoring service derived for a single prediction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DerivedFeatures {
    pub account_age_days: Option<i64>,
    pub kyc_verified: Option<i64>,
    pub transaction_amount: Option<f64>,
    pub is_high_amount_transaction: Option<i64>,
    pub is_night_txn: Option<i64>,
    pub is_weekend_txn: Option<i64>
}

/// One result record exactly as returned by the scoring service.
///
/// Every field is optional: the service omits fields for failed rows and the
/// single and bulk endpoints do not return the same set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawResult {
    pub transaction_id: Option<String>,
    pub customer_id: Option<String>,
    pub transaction_amount: Option<f64>,
    pub channel_encoded: Option<i64>,
    pub kyc_verified: Option<i64>,
    pub account_age_days: Option<i64>,
    pub transaction_datetime: Option<String>,
    pub risk_score: Option<f64>,
    pub combined_score: Option<f64>,
    pub is_fraud: Option<i64>,
    pub model_risk_score: Option<f64>,
    pub rule_score: Option<f64>,
    pub rules_triggered: Option<Vec<String>>,
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub explanation: Option<String>,
    pub prediction_id: Option<String>,
    pub timestamp: Option<String>,
    pub derived_features: Option<DerivedFeatures>
}

/// A classified result, with the source transaction fields mirrored back.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub transaction_id: String,
    pub customer_id: String,
    pub transaction_amount: f64,
    pub channel_encoded: i64,
    pub kyc_verified: i64,
    pub account_age_days: i64,
    pub transaction_datetime: String,
    pub risk_score: f64,
    pub is_fraud: Option<i64>,
    pub model_risk_score: f64,
    pub rule_score: f64,
    pub rules_triggered: Vec<String>,
    pub status: ResultStatus,
    pub explanation: String,
    pub error_message: Option<String>
}

/// Batch level totals reported by the service alongside the results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchStats {
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub fraud_detected: usize,
    pub fraud_rate: f64
}
