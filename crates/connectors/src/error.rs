use crate::file::csv::error::FileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// No table is registered under the requested name.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// File-related error.
    #[error("File error: {0}")]
    FileError(#[from] FileError),
}
