//! Composite priority score computation.
//! Implements the weighted score S(c) from ARCHITECTURE.md §3.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use stratyx_common::error::{Result, StratyxError};
use stratyx_common::records::{ClientRecord, Factor};

use crate::jenks;
use crate::weights::WeightVector;

/// A client with its computed priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredClient {
    pub record: ClientRecord,
    /// Weighted priority score, on the same 0–10 scale as the factors.
    pub priority_score: f64,
    /// 1-based position in descending score order.
    pub rank: usize,
    /// Tier number, 1 = highest priority; `None` until tiers are assigned.
    pub tier: Option<usize>,
}

/// Record-level note that one or more factor cells were blank and
/// contributed 0 to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingFieldNote {
    pub client: String,
    pub factors: Vec<Factor>,
}

/// Result of one scoring pass over the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Scored clients, descending by priority score; ties keep upload order.
    pub clients: Vec<ScoredClient>,
    /// Which clients had blank factor cells, and which factors were blank.
    /// Non-fatal; callers decide whether to surface this.
    pub missing_fields: Vec<MissingFieldNote>,
}

/// Score every record: normalise the weights, take the weighted sum of the
/// five factors, then sort descending and assign 1-based ranks.
///
/// S(c) = Σ w_i' × factor_i, with w_i' = w_i / Σ w_j.
///
/// The difficulty factor enters as-is, positively weighted, exactly like
/// the other four; no sign inversion is applied. A blank factor cell
/// contributes 0 and is reported in the outcome's `missing_fields`.
///
/// The whole table scores or the call fails; no partial result.
pub fn score(records: &[ClientRecord], weights: &WeightVector) -> Result<ScoreOutcome> {
    if records.is_empty() {
        return Err(StratyxError::EmptyInput);
    }
    let normed = weights.normalised()?;

    let mut missing_fields = Vec::new();
    let mut clients: Vec<ScoredClient> = records
        .iter()
        .map(|record| {
            let raw = record.factors.as_array();
            let mut blank = Vec::new();
            let mut priority_score = 0.0;
            for (i, factor) in Factor::ALL.iter().enumerate() {
                match raw[i] {
                    Some(value) => priority_score += normed[i] * value,
                    None => blank.push(*factor), // contributes 0
                }
            }
            if !blank.is_empty() {
                missing_fields.push(MissingFieldNote {
                    client: record.name.clone(),
                    factors: blank,
                });
            }
            ScoredClient {
                record: record.clone(),
                priority_score,
                rank: 0,
                tier: None,
            }
        })
        .collect();

    // Stable sort keeps the original upload order for equal scores.
    clients.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });
    for (i, client) in clients.iter_mut().enumerate() {
        client.rank = i + 1;
    }

    Ok(ScoreOutcome {
        clients,
        missing_fields,
    })
}

/// Score the table and assign natural-break tiers in one pass.
///
/// Tier 1 holds the highest scores. `k` is clamped to the number of
/// distinct score values, so every assigned tier is non-empty; see
/// `jenks::partition` for the clamping and fallback rules.
pub fn score_and_tier(
    records: &[ClientRecord],
    weights: &WeightVector,
    k: usize,
) -> Result<ScoreOutcome> {
    let mut outcome = score(records, weights)?;

    let scores: Vec<f64> = outcome
        .clients
        .iter()
        .map(|c| c.priority_score)
        .collect();
    let starts = jenks::partition(&scores, k)?;

    let mut tier = 0;
    for (pos, client) in outcome.clients.iter_mut().enumerate() {
        if tier < starts.len() && pos == starts[tier] {
            tier += 1;
        }
        client.tier = Some(tier);
    }

    Ok(outcome)
}
