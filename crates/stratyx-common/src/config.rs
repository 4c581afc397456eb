//! Analysis configuration for prioritisation runs.
//!
//! Callers can override factor weights and the tier count via TOML config;
//! defaults mirror the dashboard's slider defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StratyxError};

/// Complete analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Factor weights
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Tier partitioning options
    #[serde(default)]
    pub tiers: TierConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            tiers: TierConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: AnalysisConfig =
            toml::from_str(raw).map_err(|e| StratyxError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the weight and tier constraints.
    pub fn validate(&self) -> Result<()> {
        if !self.scoring.is_valid() {
            return Err(StratyxError::Config(
                "factor weights must be finite, non-negative, and not all zero".to_string(),
            ));
        }
        if self.tiers.count == 0 {
            return Err(StratyxError::Config(
                "tier count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ── Scoring Configuration ─────────────────────────────────────────────────────

/// Factor weights for priority scoring.
/// Weights need not sum to 1; the scorer normalises by their sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight for active work volume
    #[serde(default = "default_current_work_weight")]
    pub current_work: f64,

    /// Weight for pipeline / future potential
    #[serde(default = "default_future_work_weight")]
    pub future_work: f64,

    /// Weight for difficulty dealing with the client
    #[serde(default = "default_difficulty_weight")]
    pub difficulty: f64,

    /// Weight for margin / rates
    #[serde(default = "default_profitability_weight")]
    pub profitability: f64,

    /// Weight for staffing flexibility
    #[serde(default = "default_ease_weight")]
    pub ease_to_distribute: f64,
}

fn default_current_work_weight() -> f64 {
    0.30
}
fn default_future_work_weight() -> f64 {
    0.25
}
fn default_difficulty_weight() -> f64 {
    0.15
}
fn default_profitability_weight() -> f64 {
    0.25
}
fn default_ease_weight() -> f64 {
    0.05
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            current_work: default_current_work_weight(),
            future_work: default_future_work_weight(),
            difficulty: default_difficulty_weight(),
            profitability: default_profitability_weight(),
            ease_to_distribute: default_ease_weight(),
        }
    }
}

impl ScoringConfig {
    /// Weights must be finite and non-negative, with a positive sum.
    pub fn is_valid(&self) -> bool {
        let weights = [
            self.current_work,
            self.future_work,
            self.difficulty,
            self.profitability,
            self.ease_to_distribute,
        ];
        weights.iter().all(|w| w.is_finite() && *w >= 0.0) && weights.iter().sum::<f64>() > 0.0
    }
}

// ── Tier Configuration ────────────────────────────────────────────────────────

/// Tier partitioning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    /// Requested number of tiers; clamped to the number of distinct
    /// scores at partition time.
    #[serde(default = "default_tier_count")]
    pub count: usize,
}

fn default_tier_count() -> usize {
    4
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            count: default_tier_count(),
        }
    }
}
