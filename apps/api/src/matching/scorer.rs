//! Match scoring: pluggable, trait-based scorer that rates providers against a job.
//!
//! Default: `WeightedMatchScorer` (fixed five-dimension weighted sum, deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, built at startup.

use std::cmp::Ordering;

use tracing::debug;

use crate::matching::availability::availability_score;
use crate::matching::budget::budget_score;
use crate::matching::explanation::build_explanation;
use crate::matching::location::location_score;
use crate::matching::quality::quality_score;
use crate::matching::skills::skill_score;
use crate::matching::weights::{ComponentScores, MatchWeights};
use crate::models::job::JobRequest;
use crate::models::match_result::MatchResult;
use crate::models::provider::ProviderCandidate;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement `score` to swap the scoring backend; ranking comes for free.
pub trait MatchScorer: Send + Sync {
    /// Scores one provider against one job. Never fails: degraded inputs fall
    /// back to neutral component scores.
    fn score(&self, job: &JobRequest, candidate: &ProviderCandidate) -> MatchResult;

    /// Keeps providers in the job's category (exact match), scores them and
    /// returns the best `top_k`, highest first. Ties keep input order.
    fn rank(
        &self,
        job: &JobRequest,
        candidates: &[ProviderCandidate],
        top_k: usize,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = candidates
            .iter()
            .filter(|c| c.category == job.category)
            .map(|c| self.score(job, c))
            .collect();

        debug!(
            job_id = %job.id,
            candidates = candidates.len(),
            in_category = results.len(),
            top_k,
            "Ranked providers"
        );

        // sort_by is stable, so equal scores keep their input order
        results.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(Ordering::Equal)
        });
        results.truncate(top_k);
        results
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted sum of skill, location, budget, availability and quality scores.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        debug_assert!((weights.sum() - 1.0).abs() < 1e-9, "weights must sum to 1.0");
        Self { weights }
    }

    pub fn component_scores(job: &JobRequest, candidate: &ProviderCandidate) -> ComponentScores {
        ComponentScores {
            skill: skill_score(&job.required_skills, &candidate.skills),
            location: location_score(&job.location, &candidate.location),
            budget: budget_score(
                candidate.hourly_rate,
                job.estimated_hours,
                job.budget_min,
                job.budget_max,
            ),
            availability: availability_score(job.urgency, candidate),
            quality: quality_score(candidate.rating, candidate.completed_jobs),
        }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, job: &JobRequest, candidate: &ProviderCandidate) -> MatchResult {
        let scores = Self::component_scores(job, candidate);

        MatchResult {
            provider_id: candidate.id.clone(),
            job_id: job.id.clone(),
            skill_score: scores.skill,
            location_score: scores.location,
            budget_score: scores.budget,
            availability_score: scores.availability,
            quality_score: scores.quality,
            overall_score: self.weights.combine(&scores),
            explanation: build_explanation(&scores),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
