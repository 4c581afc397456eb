//! Weight vector for client priority scoring.
//! See ARCHITECTURE.md §3.1 — factor weights and normalisation.

use serde::{Deserialize, Serialize};
use stratyx_common::config::ScoringConfig;
use stratyx_common::error::{Result, StratyxError};

/// The 5-component factor weight vector W.
/// Weights are non-negative and need not sum to 1; the scorer divides
/// by their sum, so only the relative proportions matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVector {
    /// Weight for active work volume
    pub current_work: f64,
    /// Weight for pipeline / future potential
    pub future_work: f64,
    /// Weight for difficulty dealing with the client
    pub difficulty: f64,
    /// Weight for margin / rates
    pub profitability: f64,
    /// Weight for staffing flexibility
    pub ease_to_distribute: f64,
}

impl Default for WeightVector {
    /// Default weights mirroring the dashboard slider defaults.
    fn default() -> Self {
        Self {
            current_work:       0.30,
            future_work:        0.25,
            difficulty:         0.15,
            profitability:      0.25,
            ease_to_distribute: 0.05,
        }
    }
}

impl WeightVector {
    /// Build from a scoring configuration section.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            current_work: config.current_work,
            future_work: config.future_work,
            difficulty: config.difficulty,
            profitability: config.profitability,
            ease_to_distribute: config.ease_to_distribute,
        }
    }

    /// Convert to array in canonical factor order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.current_work,
            self.future_work,
            self.difficulty,
            self.profitability,
            self.ease_to_distribute,
        ]
    }

    /// Sum of all five weights.
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Validate that all weights are finite, non-negative, and not all zero.
    pub fn validate(&self) -> bool {
        self.as_array().iter().all(|w| w.is_finite() && *w >= 0.0) && self.sum() > 0.0
    }

    /// Renormalise weights in place so they sum to 1.0.
    pub fn normalise(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.current_work       /= sum;
            self.future_work        /= sum;
            self.difficulty         /= sum;
            self.profitability      /= sum;
            self.ease_to_distribute /= sum;
        }
    }

    /// Normalised weights in canonical factor order.
    /// Fails with `DegenerateWeights` when the weight sum is zero.
    pub fn normalised(&self) -> Result<[f64; 5]> {
        let sum = self.sum();
        if sum <= 0.0 {
            return Err(StratyxError::DegenerateWeights);
        }
        Ok(self.as_array().map(|w| w / sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = WeightVector::default();
        assert!((w.sum() - 1.0).abs() < 1e-6, "Default weights must sum to 1.0");
        assert!(w.validate());
    }

    #[test]
    fn test_normalise_restores_sum() {
        let mut w = WeightVector::default();
        w.current_work += 0.10; // deliberately break sum
        assert!((w.sum() - 1.0).abs() > 1e-6);
        w.normalise();
        assert!((w.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalised_is_scale_invariant() {
        let w = WeightVector::default();
        let scaled = WeightVector {
            current_work: w.current_work * 40.0,
            future_work: w.future_work * 40.0,
            difficulty: w.difficulty * 40.0,
            profitability: w.profitability * 40.0,
            ease_to_distribute: w.ease_to_distribute * 40.0,
        };
        let a = w.normalised().unwrap();
        let b = scaled.normalised().unwrap();
        for i in 0..5 {
            assert!((a[i] - b[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_weights_are_degenerate() {
        let w = WeightVector {
            current_work: 0.0,
            future_work: 0.0,
            difficulty: 0.0,
            profitability: 0.0,
            ease_to_distribute: 0.0,
        };
        assert!(!w.validate());
        assert!(matches!(
            w.normalised(),
            Err(StratyxError::DegenerateWeights)
        ));
    }
}
