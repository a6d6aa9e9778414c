// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::score::DEFAULT_MAX_SOURCE_BYTES;
use crate::walker::DEFAULT_MAX_NESTING;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_nesting: default_max_nesting(),
            max_source_bytes: default_max_source_bytes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions picked up when a directory is scanned, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub trace: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            trace: false,
        }
    }
}

const fn default_max_nesting() -> usize { DEFAULT_MAX_NESTING }
const fn default_max_source_bytes() -> usize { DEFAULT_MAX_SOURCE_BYTES }

fn default_extensions() -> Vec<String> {
    vec!["js".into(), "mjs".into(), "cjs".into(), "jsx".into()]
}

/// On-disk shape of `jsdepth.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDepthToml {
    #[serde(default)]
    pub limits: LimitConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub limits: LimitConfig,
    pub scan: ScanConfig,
}
