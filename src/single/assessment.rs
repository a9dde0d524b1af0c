use serde::Serialize;

use crate::models::RawResult;
use crate::results::RISKY_THRESHOLD;

/// Scores strictly above this are blocked even when the model did not flag fraud.
pub const BLOCK_THRESHOLD: f64 = 0.8;

const VERY_NEW_ACCOUNT_DAYS: i64 = 7;
const NEW_ACCOUNT_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    #[serde(rename = "Block Transaction")]
    Block,
    #[serde(rename = "Manual Review Required")]
    ManualReview,
    #[serde(rename = "Approve Transaction")]
    Approve
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub message: String
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactor {
    pub label: String,
    pub severity: Severity,
    pub description: String
}

impl RiskFactor {
    fn new(label: impl Into<String>, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            severity,
            description: description.into()
        }
    }
}

/// Single predictions report `combined_score`; `risk_score` only when it is missing.
pub fn combined_score(raw: &RawResult) -> f64 {
    raw.combined_score.or(raw.risk_score).unwrap_or(0.0)
}

pub fn recommend(raw: &RawResult) -> Recommendation {
    let risk = combined_score(raw);
    let explanation = raw.explanation.clone().filter(|text| !text.is_empty());

    let (action, fallback) = if raw.is_fraud == Some(1) || risk > BLOCK_THRESHOLD {
        (Action::Block, "High fraud probability detected. Recommend blocking this transaction and conducting manual review.")
    } else if risk > RISKY_THRESHOLD {
        (Action::ManualReview, "Moderate risk detected. Recommend manual review before processing.")
    } else {
        (Action::Approve, "Low risk transaction. Safe to proceed with standard monitoring.")
    };

    Recommendation {
        action,
        message: explanation.unwrap_or_else(|| fallback.to_string())
    }
}

/// Lists what pushed the score up: every triggered rule, then the derived
/// features the service flagged.
pub fn risk_factors(raw: &RawResult) -> Vec<RiskFactor> {
    let mut factors: Vec<RiskFactor> = raw.rules_triggered.iter()
        .flatten()
        .map(|rule| RiskFactor::new(rule.as_str(), Severity::High, "Rule-based detection"))
        .collect();

    if let Some(features) = &raw.derived_features {
        if let Some(age) = features.account_age_days.filter(|age| *age < NEW_ACCOUNT_DAYS) {
            let (label, severity) = if age < VERY_NEW_ACCOUNT_DAYS {
                ("Very New Account", Severity::High)
            } else {
                ("New Account", Severity::Medium)
            };
            factors.push(RiskFactor::new(label, severity, format!("Account age: {age} days")));
        }

        if features.kyc_verified == Some(0) {
            factors.push(RiskFactor::new("KYC Not Verified", Severity::High, "Customer identity not verified"));
        }

        if features.is_high_amount_transaction == Some(1) {
            let amount = features.transaction_amount.unwrap_or(0.0);
            factors.push(RiskFactor::new("High Amount Transaction", Severity::Medium, format!("Amount: {amount:.2}")));
        }

        if features.is_night_txn == Some(1) {
            factors.push(RiskFactor::new("Night Time Transaction", Severity::Medium, "Transaction during unusual hours"));
        }

        if features.is_weekend_txn == Some(1) {
            factors.push(RiskFactor::new("Weekend Transaction", Severity::Low, "Transaction on weekend"));
        }
    }

    if factors.is_empty() {
        factors.push(RiskFactor::new("Low Risk Profile", Severity::Low, "No significant risk factors detected"));
    }

    factors
}
