use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// A required input column is absent. Fatal for the whole run; no
    /// stage executes on a partial schema.
    #[error("required column missing: {0}")]
    MissingColumn(String),
    #[error("input table has no header row")]
    EmptyTable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
