use crate::models::job::Urgency;
use crate::models::provider::ProviderCandidate;

/// What an urgency tier asks of a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UrgencyRequirement {
    pub max_response_time_hours: f64,
    pub min_availability_ratio: f64,
}

impl Urgency {
    pub fn requirement(self) -> UrgencyRequirement {
        let (max_response_time_hours, min_availability_ratio) = match self {
            Urgency::Asap => (2.0, 0.8),
            Urgency::Week => (12.0, 0.6),
            Urgency::Month => (48.0, 0.4),
            Urgency::Flexible => (168.0, 0.2),
        };
        UrgencyRequirement {
            max_response_time_hours,
            min_availability_ratio,
        }
    }
}

/// Mean of a response-time component and a weekly-availability component.
pub fn availability_score(urgency: Urgency, candidate: &ProviderCandidate) -> f64 {
    let req = urgency.requirement();

    let response = if candidate.response_time_hours <= req.max_response_time_hours {
        1.0
    } else {
        0.5
    };

    let ratio = (candidate.available_days().min(7) as f64) / 7.0;
    let availability = if ratio >= req.min_availability_ratio {
        1.0
    } else {
        ratio
    };

    (response + availability) / 2.0
}
