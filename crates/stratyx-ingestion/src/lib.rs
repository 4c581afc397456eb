//! stratyx-ingestion — Client table loading.
//! Parses uploaded rankings files into the record types scored by stratyx-ranker.

pub mod csv_source;
