use crate::{error::AdapterError, loader::TableLoader};
use async_trait::async_trait;
use model::records::row::Row;
use std::collections::HashMap;

/// Tables held in memory, keyed by name. Every load hands out a copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableLoader {
    tables: HashMap<String, Vec<Row>>,
}

impl MemoryTableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: &str, rows: Vec<Row>) -> Self {
        self.insert(name, rows);
        self
    }

    pub fn insert(&mut self, name: &str, rows: Vec<Row>) {
        self.tables.insert(name.to_string(), rows);
    }
}

#[async_trait]
impl TableLoader for MemoryTableLoader {
    async fn load_table(&self, name: &str) -> Result<Vec<Row>, AdapterError> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| AdapterError::TableNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;

    #[tokio::test]
    async fn serves_registered_tables() {
        let row: Row = [("id", Value::Int(1))].into_iter().collect();
        let loader = MemoryTableLoader::new().with_table("t", vec![row.clone()]);

        assert_eq!(loader.load_table("t").await.unwrap(), vec![row]);
        assert!(matches!(
            loader.load_table("u").await,
            Err(AdapterError::TableNotFound(name)) if name == "u"
        ));
    }
}
