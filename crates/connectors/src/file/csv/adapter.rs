use crate::file::csv::{error::FileError, settings::CsvSettings, types::cell_value};
use model::records::row::Row;
use std::io::Read;
use tracing::warn;

/// Turns CSV text into bare-keyed rows.
#[derive(Debug, Clone, Default)]
pub struct CsvAdapter {
    pub settings: CsvSettings,
}

impl CsvAdapter {
    pub fn new(settings: CsvSettings) -> Self {
        CsvAdapter { settings }
    }

    /// Reads every record from `reader` in order. `source` names the input
    /// in diagnostics.
    pub fn read_rows<R: Read>(&self, reader: R, source: &str) -> Result<Vec<Row>, FileError> {
        if !self.settings.delimiter.is_ascii() {
            return Err(FileError::InvalidFormat(format!(
                "Delimiter {:?} is not a single-byte character",
                self.settings.delimiter
            )));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.settings.delimiter as u8)
            .has_headers(self.settings.has_headers)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = if self.settings.has_headers {
            rdr.headers()?.iter().map(|h| h.trim().to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;

            if self.settings.has_headers && record.len() != headers.len() {
                warn!(
                    "{}: record {} has {} cells, expected {}",
                    source,
                    idx + 1,
                    record.len(),
                    headers.len()
                );
            }

            let mut row = Row::with_capacity(record.len());
            for (col, cell) in record.iter().enumerate() {
                let value = cell_value(cell, self.settings.infer_types);
                if self.settings.has_headers {
                    // Cells beyond the header row have no column to land in.
                    let Some(name) = headers.get(col) else { break };
                    row.set(name, value);
                } else {
                    row.set(&format!("column_{}", col + 1), value);
                }
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;

    #[test]
    fn reads_headers_and_typed_cells() {
        let data = "id,name,score\n1,Alice,9.5\n2,Bob,\n";
        let rows = CsvAdapter::default()
            .read_rows(data.as_bytes(), "people")
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
        assert_eq!(rows[0].get("name"), Some(&Value::from("Alice")));
        assert_eq!(rows[0].get("score"), Some(&Value::Float(9.5)));
        assert_eq!(rows[1].get("score"), Some(&Value::from("")));
    }

    #[test]
    fn short_records_leave_trailing_columns_absent() {
        let data = "id,name,age\n1,Alice\n";
        let rows = CsvAdapter::default()
            .read_rows(data.as_bytes(), "people")
            .unwrap();

        assert_eq!(rows[0].get("name"), Some(&Value::from("Alice")));
        assert!(!rows[0].contains_key("age"));
    }

    #[test]
    fn headerless_files_get_positional_names() {
        let data = "1;x\n2;y\n";
        let adapter = CsvAdapter::new(CsvSettings::new(';', false));
        let rows = adapter.read_rows(data.as_bytes(), "raw").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("column_1"), Some(&Value::Int(2)));
        assert_eq!(rows[1].get("column_2"), Some(&Value::from("y")));
    }

    #[test]
    fn rejects_multibyte_delimiter() {
        let adapter = CsvAdapter::new(CsvSettings::new('§', true));
        let err = adapter.read_rows("a\n1\n".as_bytes(), "t").unwrap_err();
        assert!(matches!(err, FileError::InvalidFormat(_)));
    }
}
