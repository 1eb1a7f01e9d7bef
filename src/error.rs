//! Errors raised while reading configuration, rosters, and scenarios
//!
//! The simulation itself never fails; only the file/JSON edge does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemspaceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MemspaceError>;

/// Read a file and decode it as JSON
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| MemspaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MemspaceError::Json {
        path: path.to_path_buf(),
        source,
    })
}
