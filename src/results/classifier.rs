use crate::models::{PredictionResult, RawResult, ResultStatus};

/// Scores strictly above this are classified as risky.
pub const RISKY_THRESHOLD: f64 = 0.4;

const FRAUD_EXPLANATION: &str = "High fraud probability detected";
const LOW_RISK_EXPLANATION: &str = "Low risk transaction";

/// Maps one raw bulk record to a classified [`PredictionResult`].
///
/// Status precedence, first match wins: the record's own `"error"` status, then
/// `is_fraud == 1`, then `risk_score` above [`RISKY_THRESHOLD`], else legitimate.
/// Absent numbers default to 0 and absent rules to an empty list.
pub fn classify(raw: &RawResult) -> PredictionResult {
    classify_scored(raw, raw.risk_score.unwrap_or(0.0))
}

/// Same as [`classify`] with the caller choosing which service score drives the status.
pub fn classify_scored(raw: &RawResult, score: f64) -> PredictionResult {
    let rules_triggered = raw.rules_triggered.clone().unwrap_or_default();

    PredictionResult {
        transaction_id: raw.transaction_id.clone().unwrap_or_default(),
        customer_id: raw.customer_id.clone().unwrap_or_default(),
        transaction_amount: raw.transaction_amount.unwrap_or(0.0),
        channel_encoded: raw.channel_encoded.unwrap_or(0),
        kyc_verified: raw.kyc_verified.unwrap_or(0),
        account_age_days: raw.account_age_days.unwrap_or(0),
        transaction_datetime: raw.transaction_datetime.clone().unwrap_or_default(),
        risk_score: score,
        is_fraud: raw.is_fraud,
        model_risk_score: raw.model_risk_score.unwrap_or(0.0),
        rule_score: raw.rule_score.unwrap_or(0.0),
        explanation: explanation(raw, &rules_triggered),
        rules_triggered,
        status: status(raw, score),
        error_message: raw.error_message.clone()
    }
}

fn status(raw: &RawResult, score: f64) -> ResultStatus {
    if raw.status.as_deref() == Some("error") {
        ResultStatus::Error
    } else if raw.is_fraud == Some(1) {
        ResultStatus::Fraud
    } else if score > RISKY_THRESHOLD {
        ResultStatus::Risky
    } else {
        ResultStatus::Legitimate
    }
}

fn explanation(raw: &RawResult, rules_triggered: &[String]) -> String {
    if !rules_triggered.is_empty() {
        return rules_triggered.join(", ");
    }

    if let Some(explanation) = raw.explanation.as_deref().filter(|text| !text.is_empty()) {
        return explanation.to_string();
    }

    if raw.is_fraud == Some(1) {
        FRAUD_EXPLANATION.to_string()
    } else {
        LOW_RISK_EXPLANATION.to_string()
    }
}
