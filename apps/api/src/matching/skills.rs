use std::collections::BTreeSet;

/// Multiplier applied when every required skill is covered by the provider.
const FULL_COVERAGE_BONUS: f64 = 1.2;

/// Per-skill multipliers for trades where a confirmed match is worth more (or less).
/// Skills not listed use 1.0.
const SKILL_WEIGHTS: &[(&str, f64)] = &[
    ("construction", 1.2),
    ("electrical", 1.3),
    ("plumbing", 1.3),
    ("tech", 1.1),
    ("automotive", 1.2),
    ("landscaping", 1.0),
    ("cleaning", 0.9),
];

pub fn skill_weight(skill: &str) -> f64 {
    SKILL_WEIGHTS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, weight)| *weight)
        .unwrap_or(1.0)
}

/// |A ∩ B| / |A ∪ B|, or 0.0 when either set is empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Skill compatibility in 0.0 – 1.0.
///
/// Jaccard similarity, boosted by 1.2 when the provider covers every required
/// skill, then multiplied once per matched skill by that skill's weight.
/// Weights compound across matched skills; the result is capped at 1.0.
pub fn skill_score(required: &BTreeSet<String>, offered: &BTreeSet<String>) -> f64 {
    let mut score = jaccard(required, offered);
    if score == 0.0 {
        return 0.0;
    }

    if required.is_subset(offered) {
        score *= FULL_COVERAGE_BONUS;
    }

    for skill in required.intersection(offered) {
        score *= skill_weight(skill);
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sets_score_zero() {
        assert_eq!(skill_score(&set(&[]), &set(&["plumbing"])), 0.0);
        assert_eq!(skill_score(&set(&["plumbing"]), &set(&[])), 0.0);
        assert_eq!(skill_score(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        assert_eq!(skill_score(&set(&["roofing"]), &set(&["painting"])), 0.0);
    }

    #[test]
    fn test_jaccard_ratio() {
        let j = jaccard(&set(&["a", "b"]), &set(&["b", "c", "d"]));
        assert!((j - 0.25).abs() < 1e-12, "Jaccard was {j}");
    }

    #[test]
    fn test_partial_overlap_without_bonus() {
        // 1/3 overlap, "pipe" not covered → no bonus; "drain" weight 1.0
        let score = skill_score(&set(&["drain", "pipe"]), &set(&["drain", "tile"]));
        assert!((score - 1.0 / 3.0).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_full_coverage_bonus_applies() {
        // 1/2 × 1.2 = 0.6
        let score = skill_score(&set(&["drain"]), &set(&["drain", "tile"]));
        assert!((score - 0.6).abs() < 1e-12, "Score was {score}");
    }

    #[test]
    fn test_weights_compound_per_matched_skill() {
        // 2/3 × 1.2 = 0.8, then × 1.3 for plumbing → 1.04 → capped
        let capped = skill_score(
            &set(&["plumbing", "pipe"]),
            &set(&["plumbing", "pipe", "drain"]),
        );
        assert_eq!(capped, 1.0);

        // 1/4 × 1.2 × 1.3 × 1.3 = 0.507
        let compounded = skill_score(
            &set(&["electrical", "plumbing"]),
            &set(&["electrical", "plumbing", "a", "b", "c", "d", "e", "f"]),
        );
        assert!((compounded - 0.507).abs() < 1e-9, "Score was {compounded}");
    }

    #[test]
    fn test_low_weight_skill_reduces_score() {
        // 1/2 × 1.2 × 0.9 = 0.54
        let score = skill_score(&set(&["cleaning"]), &set(&["cleaning", "ironing"]));
        assert!((score - 0.54).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_identical_sets_maximize_jaccard() {
        let s = set(&["a", "b", "c"]);
        assert_eq!(jaccard(&s, &s), 1.0);
        assert_eq!(skill_score(&s, &s), 1.0);
    }

    #[test]
    fn test_unknown_skill_weight_is_one() {
        assert_eq!(skill_weight("welding"), 1.0);
        assert_eq!(skill_weight("electrical"), 1.3);
    }
}
