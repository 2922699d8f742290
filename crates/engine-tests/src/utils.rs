use connectors::file::csv::settings::CsvSettings;
use engine_config::settings::EngineSettings;
use engine_runtime::QueryExecutor;
use model::{core::value::Value, query::descriptor::QueryDescriptor, records::row::Row};
use std::{fs, path::Path};
use tempfile::TempDir;

/// Two-row main table used by the basic join scenarios.
pub const MAIN_CSV: &str = "id,name\n1,a\n2,b\n";

/// Single-row join table matching `main.id = 1`.
pub const JOIN_CSV: &str = "id,val\n1,x\n";

pub const STUDENT_CSV: &str = "id,name,age
1,John,30
2,Jane,25
3,Bob,22
4,Alice,24
";

/// Student 4 has no enrollment; student_id 5 has no student.
pub const ENROLLMENT_CSV: &str = "student_id,course
1,Mathematics
1,Physics
2,Chemistry
3,Mathematics
5,Biology
";

pub const AGES_CSV: &str = "name,age
Ann,25
Ben,35
Cat,40
";

/// A temporary data directory populated with CSV tables.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            dir: tempfile::tempdir().expect("create temp data dir"),
        }
    }

    /// The fixture with every table above written to it.
    pub fn standard() -> Self {
        Fixture::new()
            .with_table("main", MAIN_CSV)
            .with_table("join", JOIN_CSV)
            .with_table("student", STUDENT_CSV)
            .with_table("enrollment", ENROLLMENT_CSV)
            .with_table("people", AGES_CSV)
    }

    pub fn with_table(self, name: &str, csv: &str) -> Self {
        fs::write(self.dir.path().join(format!("{name}.csv")), csv).expect("write csv table");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            data_dir: self.dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::from_settings(&self.settings())
    }

    /// An executor that keeps every cell as a string.
    pub fn untyped_executor(&self) -> QueryExecutor {
        let settings = EngineSettings {
            csv: CsvSettings {
                infer_types: false,
                ..Default::default()
            },
            ..self.settings()
        };
        QueryExecutor::from_settings(&settings)
    }

    pub async fn run(&self, query: &QueryDescriptor) -> Vec<Row> {
        self.executor().execute(query).await.expect("query runs")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture::new()
    }
}

/// Collects the value under `key` from each row.
pub fn column(rows: &[Row], key: &str) -> Vec<Option<Value>> {
    rows.iter().map(|r| r.get(key).cloned()).collect()
}

pub fn row(pairs: &[(&str, Value)]) -> Row {
    pairs.iter().cloned().collect()
}
