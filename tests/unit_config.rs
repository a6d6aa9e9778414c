// tests/unit_config.rs
use std::fs;
use jsdepth_core::config::{Config, LimitConfig, ScanConfig};
use jsdepth_core::ScoreError;

#[test]
fn test_defaults() {
    let l = LimitConfig::default();
    assert_eq!(l.max_nesting, 1024);
    assert_eq!(l.max_source_bytes, 8 * 1024 * 1024);
    let s = ScanConfig::default();
    assert_eq!(s.extensions, vec!["js", "mjs", "cjs", "jsx"]);
    assert!(!s.trace);
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("jsdepth.toml");
    fs::write(&path, "[limits]\nmax_nesting = 200").unwrap();
    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.limits.max_nesting, 200);
    assert_eq!(c.limits.max_source_bytes, 8 * 1024 * 1024);
    assert_eq!(c.scan, ScanConfig::default());
}

#[test]
fn test_scan_section() {
    let mut c = Config::new();
    c.parse_toml("[scan]\nextensions = [\"js\"]\ntrace = true").unwrap();
    assert_eq!(c.scan.extensions, vec!["js"]);
    assert!(c.score_options().trace);
}

#[test]
fn test_invalid_toml() {
    let mut c = Config::new();
    assert!(matches!(
        c.parse_toml("[limits\nmax_nesting = 1"),
        Err(ScoreError::Config(_))
    ));
}

#[test]
fn test_zero_limit_rejected() {
    let mut c = Config::new();
    assert!(c.parse_toml("[limits]\nmax_source_bytes = 0").is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Config::load_from(&d.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ScoreError::Io { .. }));
}
