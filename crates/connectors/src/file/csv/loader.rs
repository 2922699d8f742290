use crate::{
    error::AdapterError,
    file::csv::{adapter::CsvAdapter, error::FileError, settings::CsvSettings},
    loader::TableLoader,
};
use async_trait::async_trait;
use model::records::row::Row;
use std::{io::ErrorKind, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXTENSION: &str = "csv";

/// Serves tables from `<root>/<name>.<extension>` files.
#[derive(Debug, Clone)]
pub struct CsvTableLoader {
    root: PathBuf,
    extension: String,
    adapter: CsvAdapter,
}

impl CsvTableLoader {
    pub fn new(root: impl Into<PathBuf>, settings: CsvSettings) -> Self {
        CsvTableLoader {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            adapter: CsvAdapter::new(settings),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{}", self.extension))
    }
}

#[async_trait]
impl TableLoader for CsvTableLoader {
    async fn load_table(&self, name: &str) -> Result<Vec<Row>, AdapterError> {
        let path = self.path_for(name);
        let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
            ErrorKind::NotFound => FileError::NotFound(path.display().to_string()),
            _ => FileError::IoError(err),
        })?;

        let rows = self.adapter.read_rows(bytes.as_slice(), name)?;
        debug!("Loaded {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}
