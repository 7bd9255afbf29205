//! Table error types.

/// Errors from sorting or loading a trade table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Column index is not inside the header
    #[error("column {column} out of range (table has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    /// A data row is shorter than the requested column
    #[error("row {row} has no cell in column {column}")]
    MissingCell { row: usize, column: usize },

    /// Failed to read a trades file
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Failed to parse trades JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
