use thiserror::Error;

/// Errors surfaced by the snptab pipeline. Parser and filesystem errors are
/// wrapped unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum SnpTabError {
    /// A full scan of the input finished without accumulating a single record.
    #[error("no variant records found in {0}")]
    EmptyVcf(String),

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error(transparent)]
    Htslib(#[from] rust_htslib::errors::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
