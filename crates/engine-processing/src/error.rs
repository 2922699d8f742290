use thiserror::Error;

/// Failures raised while joining or filtering. Both abort the query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unsupported JOIN type: {0}")]
    UnsupportedJoinType(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
}
