pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod kind;
mod lower;
pub mod parse;
pub mod reporting;
pub mod scan;
pub mod score;
pub mod tree;
pub mod types;
pub mod walker;

pub use error::{Result, ScoreError};
pub use score::{compute_depth, DepthScorer, ScoreOptions};
pub use walker::{Score, Trace};
