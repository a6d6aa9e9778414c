// src/scan.rs
//! Batch scoring of JavaScript files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, ScoreError};
use crate::score::{stack_bytes, DepthScorer, ScoreOptions};
use crate::types::{FileScore, ScanReport};
use crate::walker::Score;

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &[".git", "node_modules", "bower_components", "target"];

fn should_prune(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && PRUNE_DIRS.contains(&entry.file_name().to_string_lossy().as_ref())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

/// Expands directories into the script files below them.
///
/// Explicit file arguments are kept as given, whatever their extension.
/// Directory contents are filtered by `extensions` and sorted.
#[must_use]
pub fn discover(paths: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in paths {
        if !root.is_dir() {
            files.push(root.clone());
            continue;
        }
        let mut found = Vec::new();
        let mut errors = 0usize;
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !should_prune(e));
        for item in walker {
            match item {
                Ok(entry) => {
                    if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                        found.push(entry.into_path());
                    }
                }
                Err(e) => {
                    errors += 1;
                    tracing::debug!(error = %e, "skipping unreadable directory entry");
                }
            }
        }
        if errors > 0 {
            tracing::warn!(root = %root.display(), errors, "errors during directory walk");
        }
        found.sort();
        files.extend(found);
    }
    files
}

pub struct Scanner {
    options: ScoreOptions,
}

impl Scanner {
    #[must_use]
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Scores every file in parallel. One failing file never stops the others.
    ///
    /// Workers get a stack sized for the nesting limit. If that pool cannot be
    /// built, each file is scored on its own sized thread instead.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let start = Instant::now();
        let pool = ThreadPoolBuilder::new()
            .stack_size(stack_bytes(self.options.max_nesting))
            .thread_name(|i| format!("jsdepth-worker-{i}"))
            .build();
        let results = match pool {
            Ok(pool) => pool.install(|| self.score_files(files, true)),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to per-file scoring threads");
                self.score_files(files, false)
            }
        };
        let report = ScanReport::from_files(results, start.elapsed().as_millis());
        tracing::debug!(
            files = report.files.len(),
            failures = report.failures,
            "scan finished"
        );
        report
    }

    fn score_files(&self, files: &[PathBuf], in_place: bool) -> Vec<FileScore> {
        files
            .par_iter()
            .map_init(
                || DepthScorer::new(self.options),
                |scorer, path| match scorer {
                    Ok(scorer) => score_file(scorer, path, in_place),
                    Err(e) => FileScore::failed(path.clone(), e),
                },
            )
            .collect()
    }

    /// Scores source text that did not come from a file (stdin, `--eval`).
    #[must_use]
    pub fn score_source(&self, label: &str, source: &str) -> ScanReport {
        let start = Instant::now();
        let path = PathBuf::from(label);
        let result = match DepthScorer::new(self.options) {
            Ok(mut scorer) => finish(path, scorer.score(source)),
            Err(e) => FileScore::failed(path, &e),
        };
        ScanReport::from_files(vec![result], start.elapsed().as_millis())
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScoreError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn score_file(scorer: &mut DepthScorer, path: &Path, in_place: bool) -> FileScore {
    let result = read_source(path).and_then(|source| {
        if in_place {
            scorer.score_in_place(&source)
        } else {
            scorer.score(&source)
        }
    });
    finish(path.to_path_buf(), result)
}

fn finish(path: PathBuf, result: Result<Score>) -> FileScore {
    match result {
        Ok(score) => FileScore::scored(path, score),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not score input");
            FileScore::failed(path, &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_filters_and_prunes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();
        fs::write(dir.path().join("node_modules/c.js"), "c").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/d.MJS"), "d").unwrap();

        let exts = vec!["js".to_string(), "mjs".to_string()];
        let found = discover(&[dir.path().to_path_buf()], &exts);
        assert_eq!(
            found,
            vec![dir.path().join("a.js"), dir.path().join("lib/d.MJS")]
        );
    }

    #[test]
    fn test_explicit_file_kept_regardless_of_extension() {
        let files = discover(&[PathBuf::from("script.txt")], &["js".to_string()]);
        assert_eq!(files, vec![PathBuf::from("script.txt")]);
    }

    #[test]
    fn test_score_source() {
        let scanner = Scanner::new(ScoreOptions::default());
        let report = scanner.score_source("<eval>", "f()");
        assert_eq!(report.files[0].depth, Some(5));
        assert!(!report.has_failures());
    }
}
