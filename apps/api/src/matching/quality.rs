/// Track-record score: 70% rating (out of 5), 30% job history saturating at 50 jobs.
pub fn quality_score(rating: f64, completed_jobs: u32) -> f64 {
    let rating_part = (rating / 5.0).clamp(0.0, 1.0);
    let history_part = (completed_jobs as f64 / 50.0).min(1.0);
    rating_part * 0.7 + history_part * 0.3
}
