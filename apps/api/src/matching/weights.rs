use serde::{Deserialize, Serialize};

/// Weights of the five dimensions in the overall score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill: f64,
    pub location: f64,
    pub budget: f64,
    pub availability: f64,
    pub quality: f64,
}

pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skill: 0.30,
    location: 0.20,
    budget: 0.20,
    availability: 0.15,
    quality: 0.15,
};

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.location + self.budget + self.availability + self.quality
    }

    /// Weighted sum of the component scores, clamped to 0.0 – 1.0.
    pub fn combine(&self, scores: &ComponentScores) -> f64 {
        (self.skill * scores.skill
            + self.location * scores.location
            + self.budget * scores.budget
            + self.availability * scores.availability
            + self.quality * scores.quality)
            .clamp(0.0, 1.0)
    }
}

/// The five per-dimension scores for one job/provider pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skill: f64,
    pub location: f64,
    pub budget: f64,
    pub availability: f64,
    pub quality: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(v: f64) -> ComponentScores {
        ComponentScores {
            skill: v,
            location: v,
            budget: v,
            availability: v,
            quality: v,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_combine_full_and_empty() {
        assert!((DEFAULT_WEIGHTS.combine(&uniform(1.0)) - 1.0).abs() < 1e-9);
        assert_eq!(DEFAULT_WEIGHTS.combine(&uniform(0.0)), 0.0);
    }

    #[test]
    fn test_combine_mixed() {
        // 0.3×1.0 + 0.2×0.5 + 0.2×0.9 + 0.15×0.6 + 0.15×0.2 = 0.7
        let scores = ComponentScores {
            skill: 1.0,
            location: 0.5,
            budget: 0.9,
            availability: 0.6,
            quality: 0.2,
        };
        let overall = DEFAULT_WEIGHTS.combine(&scores);
        assert!((overall - 0.7).abs() < 1e-9, "Overall was {overall}");
    }
}
