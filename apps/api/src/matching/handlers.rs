//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobRequest;
use crate::models::match_result::MatchResult;
use crate::models::provider::ProviderCandidate;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job: JobRequest,
    #[serde(default)]
    pub providers: Vec<ProviderCandidate>,
    pub top_k: Option<usize>,
}

/// Presentation form of a `MatchResult`: overall score scaled to 0 – 100 with one decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMatch {
    pub provider_id: String,
    pub match_score: f64,
    pub skill_match: f64,
    pub location_score: f64,
    pub budget_compatibility: f64,
    pub availability_score: f64,
    pub quality_score: f64,
    pub explanation: String,
}

impl From<MatchResult> for ProviderMatch {
    fn from(result: MatchResult) -> Self {
        Self {
            provider_id: result.provider_id,
            match_score: to_percent(result.overall_score),
            skill_match: result.skill_score,
            location_score: result.location_score,
            budget_compatibility: result.budget_score,
            availability_score: result.availability_score,
            quality_score: result.quality_score,
            explanation: result.explanation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_run_id: Uuid,
    pub job_id: String,
    pub total_candidates: usize,
    pub matches: Vec<ProviderMatch>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: JobRequest,
    pub provider: ProviderCandidate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// False when the provider would be filtered out of a ranked match.
    pub category_match: bool,
    pub result: MatchResult,
}

fn to_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_job(job: &JobRequest) -> Result<(), AppError> {
    if job.id.trim().is_empty() {
        return Err(AppError::Validation("job.id cannot be empty".to_string()));
    }
    if job.category.trim().is_empty() {
        return Err(AppError::Validation(
            "job.category cannot be empty".to_string(),
        ));
    }
    if !job.budget_min.is_finite() || !job.budget_max.is_finite() || job.budget_min < 0.0 {
        return Err(AppError::Validation(
            "job budget must be finite and non-negative".to_string(),
        ));
    }
    if job.budget_min > job.budget_max {
        return Err(AppError::Validation(format!(
            "job.budget_min ({}) exceeds job.budget_max ({})",
            job.budget_min, job.budget_max
        )));
    }
    if !job.estimated_hours.is_finite() || job.estimated_hours < 0.0 {
        return Err(AppError::Validation(
            "job.estimated_hours must be finite and non-negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_provider(provider: &ProviderCandidate) -> Result<(), AppError> {
    let invalid = |field: &str| {
        AppError::Validation(format!("provider {}: invalid {field}", provider.id))
    };

    if provider.id.trim().is_empty() {
        return Err(AppError::Validation(
            "provider.id cannot be empty".to_string(),
        ));
    }
    if !(0.0..=5.0).contains(&provider.rating) {
        return Err(invalid("rating (expected 0 – 5)"));
    }
    if !provider.hourly_rate.is_finite() || provider.hourly_rate < 0.0 {
        return Err(invalid("hourly_rate"));
    }
    if !provider.response_time_hours.is_finite() || provider.response_time_hours < 0.0 {
        return Err(invalid("response_time_hours"));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Ranks the supplied providers for a job and returns the best `top_k`.
/// Providers in another category are left out; an empty `matches` list is not an error.
pub async fn handle_find_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    validate_job(&request.job)?;
    for provider in &request.providers {
        validate_provider(provider)?;
    }

    let top_k = request.top_k.unwrap_or(state.config.default_top_k);
    if top_k > state.config.max_top_k {
        return Err(AppError::Validation(format!(
            "top_k ({top_k}) exceeds the maximum of {}",
            state.config.max_top_k
        )));
    }

    let match_run_id = Uuid::new_v4();
    let results = state.scorer.rank(&request.job, &request.providers, top_k);

    info!(
        %match_run_id,
        job_id = %request.job.id,
        candidates = request.providers.len(),
        matches = results.len(),
        "Match run complete"
    );

    Ok(Json(MatchResponse {
        match_run_id,
        job_id: request.job.id,
        total_candidates: request.providers.len(),
        matches: results.into_iter().map(ProviderMatch::from).collect(),
    }))
}

/// POST /api/v1/matches/score
///
/// Scores a single provider against a job, regardless of category.
pub async fn handle_score_provider(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    validate_job(&request.job)?;
    validate_provider(&request.provider)?;

    let result = state.scorer.score(&request.job, &request.provider);

    Ok(Json(ScoreResponse {
        category_match: request.job.category == request.provider.category,
        result,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
