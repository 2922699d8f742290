use connectors::error::AdapterError;
use engine_processing::error::EngineError;
use thiserror::Error;

/// Every way a query can fail. None of them leave a partial result.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A table could not be loaded.
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// The join or filter stage rejected the query.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
