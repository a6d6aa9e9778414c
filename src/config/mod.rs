// src/config/mod.rs
pub mod types;

use std::fs;
use std::path::Path;

pub use self::types::{Config, JsDepthToml, LimitConfig, ScanConfig};
use crate::error::{Result, ScoreError};
use crate::score::ScoreOptions;

pub const CONFIG_FILE: &str = "jsdepth.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overlaid with `jsdepth.toml` from the working directory when
    /// one exists.
    ///
    /// # Errors
    /// Returns `Config` if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// # Errors
    /// Returns `Io` if the file cannot be read, `Config` if it is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScoreError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let mut config = Self::new();
        config.parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Applies a TOML document on top of the defaults.
    ///
    /// # Errors
    /// Returns `Config` for malformed TOML or out-of-range values.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: JsDepthToml = toml::from_str(content)?;
        self.limits = parsed.limits;
        self.scan = parsed.scan;
        self.validate()
    }

    /// # Errors
    /// Returns `Config` when a limit is zero or no extension is configured.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_nesting == 0 {
            return Err(ScoreError::Config("limits.max_nesting must be positive".into()));
        }
        if self.limits.max_source_bytes == 0 {
            return Err(ScoreError::Config(
                "limits.max_source_bytes must be positive".into(),
            ));
        }
        if self.scan.extensions.is_empty() {
            return Err(ScoreError::Config("scan.extensions must not be empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn score_options(&self) -> ScoreOptions {
        ScoreOptions {
            trace: self.scan.trace,
            max_nesting: self.limits.max_nesting,
            max_source_bytes: self.limits.max_source_bytes,
        }
    }
}
