use crate::matching::weights::ComponentScores;

/// Phrases for one dimension: (≥ 0.8, ≥ 0.6, below).
type Tiers = (&'static str, &'static str, &'static str);

const SKILL: Tiers = (
    "Perfect skill match",
    "Good skill compatibility",
    "Some skill overlap",
);
const LOCATION: Tiers = ("Very close location", "Reasonable distance", "Further away");
const BUDGET: Tiers = ("Within budget", "Close to budget", "Above budget range");
const AVAILABILITY: Tiers = (
    "Highly available",
    "Good availability",
    "Limited availability",
);
const QUALITY: Tiers = (
    "Excellent track record",
    "Good reputation",
    "Building reputation",
);

fn phrase(score: f64, (high, mid, low): Tiers) -> &'static str {
    if score >= 0.8 {
        high
    } else if score >= 0.6 {
        mid
    } else {
        low
    }
}

/// One phrase per dimension (skill, location, budget, availability, quality), comma-joined.
pub fn build_explanation(scores: &ComponentScores) -> String {
    [
        phrase(scores.skill, SKILL),
        phrase(scores.location, LOCATION),
        phrase(scores.budget, BUDGET),
        phrase(scores.availability, AVAILABILITY),
        phrase(scores.quality, QUALITY),
    ]
    .join(", ")
}
