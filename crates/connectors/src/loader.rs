use crate::error::AdapterError;
use async_trait::async_trait;
use model::records::row::Row;

/// Loads a named table as an ordered sequence of bare-keyed rows.
#[async_trait]
pub trait TableLoader: Send + Sync {
    async fn load_table(&self, name: &str) -> Result<Vec<Row>, AdapterError>;
}
