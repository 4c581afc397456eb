//! Aggregate projections over a scored table.
//!
//! These back the tier-summary, status-comparison, and drop-off views of
//! the presentation layer; the engine only exposes the numbers.

use serde::{Deserialize, Serialize};

use crate::scorer::ScoredClient;

/// Display label for a tier. The default four-tier layout keeps the
/// named bands; any other tier count falls back to "Tier N".
pub fn tier_label(tier: usize, tier_count: usize) -> String {
    if tier_count == 4 {
        match tier {
            1 => return "Tier 1: Elite".to_string(),
            2 => return "Tier 2: Priority".to_string(),
            3 => return "Tier 3: Standard".to_string(),
            4 => return "Tier 4: Maintenance".to_string(),
            _ => {}
        }
    }
    format!("Tier {}", tier)
}

/// Per-tier aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: usize,
    pub label: String,
    pub count: usize,
    pub min_score: f64,
    pub max_score: f64,
    pub mean_score: f64,
}

/// Count, mean, and extremes for one group of scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub count: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
}

impl GroupStats {
    fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let sum: f64 = scores.iter().sum();
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: scores.len(),
            mean_score: sum / scores.len() as f64,
            min_score: min,
            max_score: max,
        })
    }
}

/// Current vs non-current score comparison; `None` when a group is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub current: Option<GroupStats>,
    pub non_current: Option<GroupStats>,
}

/// One point of the score drop-off curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropOffPoint {
    pub rank: usize,
    pub score: f64,
}

/// Per-tier count/min/max/mean over a tiered table.
/// Clients without a tier assignment are skipped.
pub fn tier_summaries(clients: &[ScoredClient]) -> Vec<TierSummary> {
    let tier_count = clients.iter().filter_map(|c| c.tier).max().unwrap_or(0);
    let mut summaries = Vec::new();
    for tier in 1..=tier_count {
        let scores: Vec<f64> = clients
            .iter()
            .filter(|c| c.tier == Some(tier))
            .map(|c| c.priority_score)
            .collect();
        if let Some(stats) = GroupStats::from_scores(&scores) {
            summaries.push(TierSummary {
                tier,
                label: tier_label(tier, tier_count),
                count: stats.count,
                min_score: stats.min_score,
                max_score: stats.max_score,
                mean_score: stats.mean_score,
            });
        }
    }
    summaries
}

/// Compare scores of current clients against the rest.
pub fn status_breakdown(clients: &[ScoredClient]) -> StatusBreakdown {
    let mut current = Vec::new();
    let mut non_current = Vec::new();
    for client in clients {
        if client.record.is_current {
            current.push(client.priority_score);
        } else {
            non_current.push(client.priority_score);
        }
    }
    StatusBreakdown {
        current: GroupStats::from_scores(&current),
        non_current: GroupStats::from_scores(&non_current),
    }
}

/// The drop-off curve: priority score against 1-based rank.
pub fn drop_off_curve(clients: &[ScoredClient]) -> Vec<DropOffPoint> {
    clients
        .iter()
        .map(|c| DropOffPoint {
            rank: c.rank,
            score: c.priority_score,
        })
        .collect()
}
