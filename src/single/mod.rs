mod assessment;
mod input;
mod predictor;
mod report;

pub use assessment::{combined_score, recommend, risk_factors, Recommendation, RiskFactor};
pub use input::SingleInput;
pub use predictor::SinglePredictor;
pub use report::PredictionReport;
