//! stratyx-ranker — Client prioritisation scoring engine.
//! Implements the scoring and tiering pipeline of ARCHITECTURE.md §3–§4.

pub mod jenks;
pub mod scorer;
pub mod summary;
pub mod weights;
