use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::geo::GeoPoint;

/// How soon the customer needs the job done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Asap,
    Week,
    Month,
    Flexible,
}

/// A customer job as supplied by the marketplace for one scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    pub location: GeoPoint,
    pub budget_min: f64,
    pub budget_max: f64,
    pub urgency: Urgency,
    /// Estimated effort, derived upstream from the job description.
    pub estimated_hours: f64,
}
