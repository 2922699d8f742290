use thiserror::Error;

/// Errors raised while loading or validating engine settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`super::EngineSettings`].
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A setting holds a value the engine cannot use.
    #[error("Invalid setting '{key}': {message}")]
    Invalid { key: String, message: String },
}
