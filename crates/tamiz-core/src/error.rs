use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("schema file not found: {}", .0.display())]
    SchemaNotFound(PathBuf),

    #[error("failed to read schema at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
