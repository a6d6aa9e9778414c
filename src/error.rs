// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    /// The source did not parse as JavaScript.
    #[error("parse failure at line {line}, column {column}")]
    Parse { line: usize, column: usize },

    #[error("JavaScript grammar unavailable: {0}")]
    ParserUnavailable(String),

    #[error("source is {len} bytes (limit: {limit})")]
    SourceTooLarge { len: usize, limit: usize },

    #[error("syntax tree nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not start scoring thread: {0}")]
    Spawn(#[source] std::io::Error),
}

impl ScoreError {
    /// True when the input itself was rejected, as opposed to an environment failure.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::SourceTooLarge { .. } | Self::NestingTooDeep { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

// Allow `?` on std::io::Error by converting to ScoreError::Io with unknown path.
impl From<std::io::Error> for ScoreError {
    fn from(source: std::io::Error) -> Self {
        ScoreError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for ScoreError {
    fn from(e: toml::de::Error) -> Self {
        ScoreError::Config(e.to_string())
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for ScoreError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => ScoreError::Io { source, path },
            None => ScoreError::Io {
                source: std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"),
                path,
            },
        }
    }
}
