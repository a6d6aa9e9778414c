// src/score.rs
//! Source-to-score entry points.
//!
//! Lowering and walking recurse once per syntax level. Both run on a thread
//! whose stack is sized from `max_nesting`, so deep input is rejected with
//! `NestingTooDeep` rather than overflowing the caller's stack.

use std::thread;

use crate::error::{Result, ScoreError};
use crate::parse::JsParser;
use crate::tree::ParseTree;
use crate::walker::{self, Score, WalkOptions, DEFAULT_MAX_NESTING};

/// Source size the classic engine's runtime was created with.
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 8 * 1024 * 1024;

// Upper bound for one lowering plus one walker level in unoptimized builds.
const STACK_BYTES_PER_LEVEL: usize = 32 * 1024;
const STACK_BASE_BYTES: usize = 4 * 1024 * 1024;

/// Stack size that fits recursion down to `max_nesting` levels.
#[must_use]
pub fn stack_bytes(max_nesting: usize) -> usize {
    max_nesting
        .saturating_mul(STACK_BYTES_PER_LEVEL)
        .saturating_add(STACK_BASE_BYTES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    pub trace: bool,
    pub max_nesting: usize,
    pub max_source_bytes: usize,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            trace: false,
            max_nesting: DEFAULT_MAX_NESTING,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

/// A parser plus limits, reusable across many sources.
pub struct DepthScorer {
    parser: JsParser,
    options: ScoreOptions,
}

impl DepthScorer {
    /// # Errors
    /// Returns `ParserUnavailable` if the grammar cannot be loaded.
    pub fn new(options: ScoreOptions) -> Result<Self> {
        Ok(Self {
            parser: JsParser::new()?,
            options,
        })
    }

    #[must_use]
    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    /// Parses and lowers `source` without scoring it.
    ///
    /// # Errors
    /// Returns `SourceTooLarge`, `Parse` or `NestingTooDeep`, or `Spawn` if
    /// the scoring thread cannot be started.
    pub fn parse_tree(&mut self, source: &str) -> Result<ParseTree> {
        self.on_scoring_stack(|scorer| scorer.parse_in_place(source))
    }

    /// Scores one snippet with a fresh counter.
    ///
    /// # Errors
    /// Returns `SourceTooLarge`, `Parse` or `NestingTooDeep`, or `Spawn` if
    /// the scoring thread cannot be started.
    pub fn score(&mut self, source: &str) -> Result<Score> {
        self.on_scoring_stack(|scorer| scorer.score_in_place(source))
    }

    /// Scores on the current thread. The caller guarantees a stack of at
    /// least [`stack_bytes`] for the configured nesting limit.
    pub(crate) fn score_in_place(&mut self, source: &str) -> Result<Score> {
        let tree = self.parse_in_place(source)?;
        let walk = WalkOptions {
            trace: self.options.trace,
            max_nesting: self.options.max_nesting,
        };
        walker::compute_depth(&tree, &walk)
    }

    fn parse_in_place(&mut self, source: &str) -> Result<ParseTree> {
        let limit = self.options.max_source_bytes;
        if source.len() > limit {
            return Err(ScoreError::SourceTooLarge {
                len: source.len(),
                limit,
            });
        }
        self.parser.parse(source, self.options.max_nesting)
    }

    fn on_scoring_stack<T, F>(&mut self, job: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(&mut Self) -> Result<T> + Send,
    {
        let bytes = stack_bytes(self.options.max_nesting);
        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name("jsdepth-score".into())
                .stack_size(bytes)
                .spawn_scoped(scope, || job(self))
                .map_err(ScoreError::Spawn)?;
            match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        })
    }
}

/// Computes the complexity depth of a JavaScript snippet.
///
/// With `trace` set, the returned [`Score`] carries the visited kind names in
/// traversal order.
///
/// # Errors
/// Returns `ScoreError::Parse` when `source` is not valid JavaScript.
pub fn compute_depth(source: &str, trace: bool) -> Result<Score> {
    let options = ScoreOptions {
        trace,
        ..ScoreOptions::default()
    };
    DepthScorer::new(options)?.score(source)
}
