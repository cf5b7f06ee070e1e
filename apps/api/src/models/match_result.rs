use serde::{Deserialize, Serialize};

/// Scored compatibility between one job and one provider. All scores are 0.0 – 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub provider_id: String,
    pub job_id: String,
    pub skill_score: f64,
    pub location_score: f64,
    pub budget_score: f64,
    pub availability_score: f64,
    pub quality_score: f64,
    pub overall_score: f64,
    pub explanation: String,
}
