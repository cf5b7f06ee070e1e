/// Budget fit of the provider's estimate (`hourly_rate × estimated_hours`).
///
/// - inside `[budget_min, budget_max]` → 1.0
/// - cheaper than `budget_min` → 0.9
/// - over `budget_max` → banded by relative overage: ≤20% → 0.7, ≤50% → 0.4, else 0.1
pub fn budget_score(
    hourly_rate: f64,
    estimated_hours: f64,
    budget_min: f64,
    budget_max: f64,
) -> f64 {
    let estimate = hourly_rate * estimated_hours;

    if estimate < budget_min {
        return 0.9;
    }
    if estimate <= budget_max {
        return 1.0;
    }

    // A zero ceiling makes any positive estimate an unbounded overage.
    if budget_max <= 0.0 {
        return 0.1;
    }

    let overage = (estimate - budget_max) / budget_max;
    if overage <= 0.2 {
        0.7
    } else if overage <= 0.5 {
        0.4
    } else {
        0.1
    }
}
