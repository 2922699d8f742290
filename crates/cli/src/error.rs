use connectors::error::AdapterError;
use engine_config::settings::error::SettingsError;
use engine_runtime::error::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to deserialize the query descriptor: {0}")]
    QueryDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize rows to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Query failed: {0}")]
    Query(#[from] QueryError),

    #[error("Failed to load table: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
