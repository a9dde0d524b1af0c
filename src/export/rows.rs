use serde::Serialize;

use crate::models::{PredictionResult, ResultStatus};
use crate::types::Channel;

/// Human readable export, one column per detail shown for a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,
    #[serde(rename = "Customer ID")]
    pub customer_id: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Channel")]
    pub channel: &'static str,
    #[serde(rename = "KYC Verified")]
    pub kyc_verified: &'static str,
    #[serde(rename = "Account Age (Days)")]
    pub account_age_days: i64,
    #[serde(rename = "Risk Score")]
    pub risk_score: String,
    #[serde(rename = "Model Score")]
    pub model_score: String,
    #[serde(rename = "Rule Score")]
    pub rule_score: String,
    #[serde(rename = "Status")]
    pub status: ResultStatus,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Rules Triggered")]
    pub rules_triggered: String,
    #[serde(rename = "Explanation")]
    pub explanation: String,
    #[serde(rename = "Error")]
    pub error: String
}

impl From<&PredictionResult> for ReportRow {
    fn from(result: &PredictionResult) -> Self {
        Self {
            transaction_id: result.transaction_id.clone(),
            customer_id: result.customer_id.clone(),
            amount: result.transaction_amount,
            channel: Channel::describe_code(result.channel_encoded),
            kyc_verified: if result.kyc_verified == 1 { "Yes" } else { "No" },
            account_age_days: result.account_age_days,
            risk_score: percent(result.risk_score),
            model_score: percent(result.model_risk_score),
            rule_score: percent(result.rule_score),
            status: result.status,
            timestamp: result.transaction_datetime.clone(),
            rules_triggered: result.rules_triggered.join("; "),
            explanation: result.explanation.clone(),
            error: result.error_message.clone().unwrap_or_default()
        }
    }
}

/// Machine readable export. The leading columns match the import header, so the
/// file can be fed back through the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub customer_id: String,
    pub transaction_id: String,
    pub transaction_amount: f64,
    pub kyc_verified: i64,
    pub account_age_days: i64,
    pub channel_encoded: i64,
    pub transaction_datetime: String,
    pub risk_score: f64,
    pub model_risk_score: f64,
    pub rule_score: f64,
    pub is_fraud: Option<i64>,
    pub status: ResultStatus,
    pub rules_triggered: String,
    pub explanation: String,
    pub error_message: String
}

impl From<&PredictionResult> for ResultRow {
    fn from(result: &PredictionResult) -> Self {
        Self {
            customer_id: result.customer_id.clone(),
            transaction_id: result.transaction_id.clone(),
            transaction_amount: result.transaction_amount,
            kyc_verified: result.kyc_verified,
            account_age_days: result.account_age_days,
            channel_encoded: result.channel_encoded,
            transaction_datetime: result.transaction_datetime.clone(),
            risk_score: result.risk_score,
            model_risk_score: result.model_risk_score,
            rule_score: result.rule_score,
            is_fraud: result.is_fraud,
            status: result.status,
            rules_triggered: result.rules_triggered.join("; "),
            explanation: result.explanation.clone(),
            error_message: result.error_message.clone().unwrap_or_default()
        }
    }
}

/// Formats a 0..1 score as a percentage with two decimals.
pub(crate) fn percent(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}
