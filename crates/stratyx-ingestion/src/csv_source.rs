//! CSV client-table loading.
//!
//! Parses an uploaded rankings table into `ClientRecord`s. Header matching
//! is whitespace-tolerant and case-insensitive; a missing required column
//! is a fatal error naming everything that is absent. See ARCHITECTURE.md §5.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use stratyx_common::error::{Result, StratyxError};
use stratyx_common::records::{ClientRecord, Factor, RawFactors};
use tracing::{debug, info};

/// Required header for the client name column.
pub const CLIENT_COLUMN: &str = "Client";

/// Required header for the current-client Y/N flag column.
pub const CURRENT_COLUMN: &str = "Current Client";

/// Load client records from a CSV file on disk.
pub fn load_clients_from_path(path: &Path) -> Result<Vec<ClientRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open client table: {:?}", path))?;
    let records = load_clients(file)?;
    info!("Loaded {} clients from {:?}", records.len(), path);
    Ok(records)
}

/// Load client records from any CSV reader.
///
/// Blank factor cells become `None` (later scored as 0 and reported by
/// the scorer); non-numeric non-blank cells are fatal — a corrupt table
/// must not silently score as zeros.
pub fn load_clients<R: Read>(reader: R) -> Result<Vec<ClientRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        // The header occupies row 1 of the file; data starts at row 2.
        let row_number = idx + 2;
        let record = parse_row(&row, &columns, row_number)?;
        if !seen.insert(record.name.clone()) {
            return Err(StratyxError::DuplicateClient(record.name));
        }
        records.push(record);
    }
    debug!("Parsed {} client rows", records.len());
    Ok(records)
}

/// Resolved positions of the required columns within the header row.
struct ColumnMap {
    name: usize,
    current: usize,
    factors: [usize; 5],
}

/// Match headers against the required columns, trimmed and case-insensitive.
fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    let lookup =
        |wanted: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(wanted));

    let mut missing = Vec::new();
    let name = lookup(CLIENT_COLUMN);
    if name.is_none() {
        missing.push(CLIENT_COLUMN);
    }
    let current = lookup(CURRENT_COLUMN);
    if current.is_none() {
        missing.push(CURRENT_COLUMN);
    }

    let mut factors = [0usize; 5];
    for (i, factor) in Factor::ALL.iter().enumerate() {
        match lookup(factor.column_name()) {
            Some(position) => factors[i] = position,
            None => missing.push(factor.column_name()),
        }
    }

    match (name, current) {
        (Some(name), Some(current)) if missing.is_empty() => Ok(ColumnMap {
            name,
            current,
            factors,
        }),
        _ => Err(StratyxError::MissingColumns(missing.join(", "))),
    }
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    row_number: usize,
) -> Result<ClientRecord> {
    let name = row.get(columns.name).unwrap_or("").trim().to_string();
    if name.is_empty() {
        return Err(StratyxError::EmptyClientName { row: row_number });
    }

    let flag = row.get(columns.current).unwrap_or("").trim();
    let is_current = flag.eq_ignore_ascii_case("y");

    let mut values = [None; 5];
    for (i, factor) in Factor::ALL.iter().enumerate() {
        let cell = row.get(columns.factors[i]).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(value) if value.is_finite() => values[i] = Some(value),
            _ => {
                return Err(StratyxError::InvalidNumeric {
                    row: row_number,
                    column: factor.column_name().to_string(),
                    value: cell.to_string(),
                });
            }
        }
    }

    Ok(ClientRecord {
        name,
        is_current,
        factors: RawFactors::from_array(values),
    })
}
