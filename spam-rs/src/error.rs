use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus directory contains no documents: {0}")]
    EmptyCorpus(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpamError {
    /// Wrap an IO error with the path that caused it
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SpamError::Read {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_read_error_names_path_once() {
        let err = SpamError::read("stop-words", io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(err.to_string(), "Failed to read stop-words");
        assert_eq!(err.source().map(|e| e.to_string()), Some("gone".to_string()));
    }
}
