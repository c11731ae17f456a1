/// Errors that can occur while reading fragment elements
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// I/O error reading the element table
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("TSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Missing required column in the header row
    #[error("Missing required element column: {0}")]
    MissingColumn(String),

    /// A field could not be interpreted
    #[error("Invalid {column} on line {line}: {value:?}")]
    InvalidValue {
        /// Column name
        column: &'static str,
        /// 1-based line number in the input
        line: u64,
        /// Offending text
        value: String,
    },
}
