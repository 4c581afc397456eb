use thiserror::Error;

#[derive(Debug, Error)]
pub enum StratyxError {
    #[error("Degenerate weights: all five factor weights are zero")]
    DegenerateWeights,

    #[error("Empty input: the client table contains no records")]
    EmptyInput,

    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    #[error("Duplicate client name: {0}")]
    DuplicateClient(String),

    #[error("Empty client name at row {row}")]
    EmptyClientName { row: usize },

    #[error("Non-numeric value '{value}' in column '{column}' at row {row}")]
    InvalidNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StratyxError>;
