//! stratyx-common — Shared types, errors, and configuration used across all Stratyx crates.

pub mod config;
pub mod error;
pub mod records;

// Re-export commonly used types
pub use config::{AnalysisConfig, ScoringConfig, TierConfig};
pub use error::{Result, StratyxError};
pub use records::{ClientRecord, Factor, RawFactors};
