/// Core record types for the client table.
/// These are Rust representations of the uploaded rankings rows.
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Factors
// ---------------------------------------------------------------------------

/// The five scoring factors, in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    CurrentWork,
    FutureWork,
    Difficulty,
    Profitability,
    EaseToDistribute,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::CurrentWork,
        Factor::FutureWork,
        Factor::Difficulty,
        Factor::Profitability,
        Factor::EaseToDistribute,
    ];

    /// Canonical input column header for this factor.
    pub fn column_name(&self) -> &'static str {
        match self {
            Factor::CurrentWork => "Current Work",
            Factor::FutureWork => "Future Work",
            Factor::Difficulty => "Difficulty Dealing With",
            Factor::Profitability => "Profitability",
            Factor::EaseToDistribute => "Ease to Distribute",
        }
    }
}

// ---------------------------------------------------------------------------
// Raw factor scores
// ---------------------------------------------------------------------------

/// Raw factor scores for one client, as uploaded.
/// All values are expected on the 0–10 scale but are passed through
/// unchanged; `None` means the cell was blank or absent. The scorer
/// treats a blank cell as 0 and reports it in a side channel rather
/// than failing the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFactors {
    pub current_work: Option<f64>,
    pub future_work: Option<f64>,
    pub difficulty: Option<f64>,
    pub profitability: Option<f64>,
    pub ease_to_distribute: Option<f64>,
}

impl RawFactors {
    /// Convert to array in canonical factor order.
    pub fn as_array(&self) -> [Option<f64>; 5] {
        [
            self.current_work,
            self.future_work,
            self.difficulty,
            self.profitability,
            self.ease_to_distribute,
        ]
    }

    /// Build from an array in canonical factor order.
    pub fn from_array(values: [Option<f64>; 5]) -> Self {
        Self {
            current_work: values[0],
            future_work: values[1],
            difficulty: values[2],
            profitability: values[3],
            ease_to_distribute: values[4],
        }
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::CurrentWork => self.current_work,
            Factor::FutureWork => self.future_work,
            Factor::Difficulty => self.difficulty,
            Factor::Profitability => self.profitability,
            Factor::EaseToDistribute => self.ease_to_distribute,
        }
    }
}

// ---------------------------------------------------------------------------
// Client record
// ---------------------------------------------------------------------------

/// One row of the client table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Client name; non-empty and unique within a table.
    pub name: String,
    /// Derived from the "Current Client" Y/N column, case-insensitive.
    pub is_current: bool,
    pub factors: RawFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_order_matches_columns() {
        let names: Vec<&str> = Factor::ALL.iter().map(|f| f.column_name()).collect();
        assert_eq!(
            names,
            vec![
                "Current Work",
                "Future Work",
                "Difficulty Dealing With",
                "Profitability",
                "Ease to Distribute",
            ]
        );
    }

    #[test]
    fn test_raw_factors_array_round_trip() {
        let values = [Some(1.0), None, Some(3.5), Some(4.0), None];
        let factors = RawFactors::from_array(values);
        assert_eq!(factors.as_array(), values);
        assert_eq!(factors.get(Factor::Difficulty), Some(3.5));
        assert_eq!(factors.get(Factor::FutureWork), None);
    }
}
