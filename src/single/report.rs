use chrono::Utc;
use serde::Serialize;

use crate::export::percent;
use crate::models::{RawResult, ResultStatus, Transaction};
use crate::results::classify_scored;
use crate::single::{combined_score, recommend, risk_factors, Recommendation, RiskFactor};

/// Downloadable summary of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub prediction_id: String,
    pub transaction_id: String,
    pub customer_id: String,
    pub timestamp: String,
    pub status: ResultStatus,
    pub risk_score: String,
    pub model_score: String,
    pub rule_score: String,
    pub rules_triggered: Vec<String>,
    pub explanation: String,
    pub recommendation: Recommendation,
    pub risk_factors: Vec<RiskFactor>,
    pub generated_by: String
}

impl PredictionReport {
    pub fn new(raw: &RawResult, transaction: &Transaction, email: &str) -> Self {
        let result = classify_scored(raw, combined_score(raw));

        Self {
            prediction_id: raw.prediction_id.clone()
                .unwrap_or_else(|| format!("PRED-{}", Utc::now().timestamp_millis())),
            transaction_id: transaction.transaction_id.clone(),
            customer_id: transaction.customer_id.clone(),
            timestamp: raw.timestamp.clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            status: result.status,
            risk_score: percent(result.risk_score),
            model_score: percent(result.model_risk_score),
            rule_score: percent(result.rule_score),
            explanation: result.explanation,
            rules_triggered: result.rules_triggered,
            recommendation: recommend(raw),
            risk_factors: risk_factors(raw),
            generated_by: email.to_string()
        }
    }
}
