// tests/integration_scan.rs
use std::fs;
use jsdepth_core::exit::JsDepthExit;
use jsdepth_core::scan::{discover, Scanner};
use jsdepth_core::types::FailureKind;
use jsdepth_core::ScoreOptions;

fn exts() -> Vec<String> {
    vec!["js".into()]
}

#[test]
fn test_bad_file_does_not_stop_scan() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("good.js"), "f()").unwrap();
    fs::write(d.path().join("bad.js"), "var = ;").unwrap();
    fs::write(d.path().join("notes.md"), "# notes").unwrap();

    let files = discover(&[d.path().to_path_buf()], &exts());
    assert_eq!(files.len(), 2);

    let report = Scanner::new(ScoreOptions::default()).scan(&files);
    assert_eq!(report.failures, 1);
    assert_eq!(report.scored_count(), 1);

    let good = report.files.iter().find(|f| f.path.ends_with("good.js")).unwrap();
    assert_eq!(good.depth, Some(5));
    let bad = report.files.iter().find(|f| f.path.ends_with("bad.js")).unwrap();
    assert_eq!(bad.failure, Some(FailureKind::InvalidInput));
    assert!(bad.error.as_deref().unwrap().contains("parse failure"));

    assert_eq!(JsDepthExit::from(&report), JsDepthExit::InvalidInput);
}

#[test]
fn test_missing_file_is_unreadable() {
    let d = tempfile::tempdir().unwrap();
    let missing = d.path().join("gone.js");
    let report = Scanner::new(ScoreOptions::default()).scan(&[missing]);
    assert_eq!(report.files[0].failure, Some(FailureKind::Unreadable));
    assert_eq!(JsDepthExit::from(&report), JsDepthExit::Error);
}

#[test]
fn test_clean_scan_succeeds_with_trace() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("a.js"), "x").unwrap();
    let options = ScoreOptions {
        trace: true,
        ..ScoreOptions::default()
    };
    let report = Scanner::new(options).scan(&discover(&[d.path().to_path_buf()], &exts()));
    assert_eq!(report.files[0].depth, Some(2));
    let trace = report.files[0].trace.as_ref().unwrap();
    assert_eq!(trace.names(), vec!["LC", "SEMI", "NAME"]);
    assert_eq!(trace.render_indented(), "LC\n  SEMI\n    NAME\n");
    assert_eq!(JsDepthExit::from(&report), JsDepthExit::Success);
}

#[test]
fn test_scan_workers_handle_default_nesting_limit() {
    let d = tempfile::tempdir().unwrap();
    let deep = |n: usize| format!("{}0{}", "[".repeat(n), "]".repeat(n));
    fs::write(d.path().join("near.js"), deep(1000)).unwrap();
    fs::write(d.path().join("over.js"), deep(3000)).unwrap();

    let report = Scanner::new(ScoreOptions::default()).scan(&discover(&[d.path().to_path_buf()], &exts()));
    let near = report.files.iter().find(|f| f.path.ends_with("near.js")).unwrap();
    assert_eq!(near.depth, Some(1000 + 3));
    let over = report.files.iter().find(|f| f.path.ends_with("over.js")).unwrap();
    assert_eq!(over.failure, Some(FailureKind::InvalidInput));
    assert!(over.error.as_deref().unwrap().contains("1024"));
}
