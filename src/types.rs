// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::error::ScoreError;
use crate::walker::{Score, Trace};

/// Why a file produced no score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The source was rejected: parse failure, size or nesting limit.
    InvalidInput,
    /// The file could not be read.
    Unreadable,
}

impl From<&ScoreError> for FailureKind {
    fn from(err: &ScoreError) -> Self {
        if err.is_input_error() {
            Self::InvalidInput
        } else {
            Self::Unreadable
        }
    }
}

/// Result of scoring a single input.
#[derive(Debug, Clone, Serialize)]
pub struct FileScore {
    pub path: PathBuf,
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
}

impl FileScore {
    #[must_use]
    pub fn scored(path: PathBuf, score: Score) -> Self {
        Self {
            path,
            depth: Some(score.depth),
            error: None,
            failure: None,
            trace: score.trace,
        }
    }

    #[must_use]
    pub fn failed(path: PathBuf, err: &ScoreError) -> Self {
        Self {
            path,
            depth: None,
            error: Some(err.to_string()),
            failure: Some(FailureKind::from(err)),
            trace: None,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.depth.is_some()
    }
}

/// Aggregated results from scoring multiple inputs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileScore>,
    pub failures: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    #[must_use]
    pub fn from_files(files: Vec<FileScore>, duration_ms: u128) -> Self {
        let failures = files.iter().filter(|f| !f.is_ok()).count();
        Self {
            files,
            failures,
            duration_ms,
        }
    }

    /// Appends the files of `other` after those already here.
    #[must_use]
    pub fn merge(mut self, other: ScanReport) -> Self {
        self.files.extend(other.files);
        self.failures += other.failures;
        self.duration_ms += other.duration_ms;
        self
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }

    /// True if some file was unreadable rather than merely invalid.
    #[must_use]
    pub fn has_unreadable(&self) -> bool {
        self.files
            .iter()
            .any(|f| f.failure == Some(FailureKind::Unreadable))
    }

    #[must_use]
    pub fn scored_count(&self) -> usize {
        self.files.len() - self.failures
    }
}
