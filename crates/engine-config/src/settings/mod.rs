use connectors::file::csv::{loader::DEFAULT_EXTENSION, settings::CsvSettings};
use error::SettingsError;
use model::query::join::RightJoinPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod error;

/// Runtime options for query execution over a directory of tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Directory holding one file per table.
    pub data_dir: PathBuf,
    /// Storage suffix appended to table names, without the dot.
    pub extension: String,
    pub csv: CsvSettings,
    pub right_join: RightJoinPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            csv: CsvSettings::default(),
            right_join: RightJoinPolicy::default(),
        }
    }
}

impl EngineSettings {
    /// Reads settings from a JSON file. Keys left out keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let settings: EngineSettings =
            serde_json::from_str(&source).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        info!("Loaded engine settings from {}", path.display());
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(SettingsError::Invalid {
                key: "extension".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if !self.csv.delimiter.is_ascii() {
            return Err(SettingsError::Invalid {
                key: "csv.delimiter".to_string(),
                message: format!("{:?} is not a single-byte character", self.csv.delimiter),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"data_dir": "/data", "right_join": "all_matches", "csv": {"delimiter": ";"}}"#,
        )
        .unwrap();

        let settings = EngineSettings::from_file(&path).unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/data"));
        assert_eq!(settings.extension, "csv");
        assert_eq!(settings.right_join, RightJoinPolicy::AllMatches);
        assert_eq!(settings.csv.delimiter, ';');
        assert!(settings.csv.has_headers);
        assert!(settings.csv.infer_types);
    }

    #[test]
    fn rejects_empty_extension() {
        let settings = EngineSettings {
            extension: ".".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { key, .. }) if key == "extension"
        ));
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            EngineSettings::from_file(dir.path().join("absent.json")),
            Err(SettingsError::Read { .. })
        ));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            EngineSettings::from_file(&path),
            Err(SettingsError::Parse { .. })
        ));
    }
}
