use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library (profile and trace loading).
///
/// The recognizer itself never fails; these only come out of the I/O
/// and parse seams around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {}", path.display())]
    ParseProfile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse trace {}", path.display())]
    ParseTrace {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("no home directory available")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
