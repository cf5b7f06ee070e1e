use std::collections::{BTreeSet, HashMap};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::geo::GeoPoint;

/// Per-weekday availability. Days absent from the map count as unavailable.
pub type WeeklyAvailability = HashMap<Weekday, bool>;

/// A provider considered for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCandidate {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    pub location: GeoPoint,
    pub rating: f64, // 0.0 – 5.0
    #[serde(default)]
    pub completed_jobs: u32,
    pub hourly_rate: f64,
    #[serde(default)]
    pub availability: WeeklyAvailability,
    pub response_time_hours: f64,
}

impl ProviderCandidate {
    /// Number of weekdays flagged as available.
    pub fn available_days(&self) -> usize {
        self.availability.values().filter(|&&open| open).count()
    }
}
