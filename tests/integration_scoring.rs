// tests/integration_scoring.rs
use jsdepth_core::{compute_depth, DepthScorer, ScoreError, ScoreOptions};

#[test]
fn test_addition_scores_three() {
    let score = compute_depth("x + 1", true).unwrap();
    assert_eq!(score.depth, 3);
    assert_eq!(
        score.trace.unwrap().names(),
        vec!["LC", "SEMI", "PLUS", "NAME", "NUMBER"]
    );
}

#[test]
fn test_call_outweighs_plain_name() {
    let call = compute_depth("f()", false).unwrap().depth;
    let name = compute_depth("x", false).unwrap().depth;
    assert_eq!(call, 5);
    assert_eq!(name, 2);
    assert!(call > name);
}

#[test]
fn test_malformed_source_is_parse_error() {
    let err = compute_depth("function (", false).unwrap_err();
    assert!(matches!(err, ScoreError::Parse { line: 1, .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_empty_source_scores_script_block() {
    assert_eq!(compute_depth("", false).unwrap().depth, 1);
}

#[test]
fn test_jsx_markup_is_transparent() {
    // LC + SEMI; every XML kind gives its unit back.
    assert_eq!(compute_depth("<div>hi</div>", false).unwrap().depth, 2);
}

#[test]
fn test_member_chain_is_cheaper_than_call_chain() {
    let members = compute_depth("a.b.c.d", false).unwrap().depth;
    let calls = compute_depth("a()()()", false).unwrap().depth;
    assert_eq!(members, 2);
    assert!(calls > members);
}

fn nested(open: &str, close: &str, levels: usize) -> String {
    format!("{}1{}", open.repeat(levels), close.repeat(levels))
}

#[test]
fn test_deep_nesting_is_rejected() {
    let source = nested("(", ")", 64);
    let options = ScoreOptions {
        max_nesting: 32,
        ..ScoreOptions::default()
    };
    let mut scorer = DepthScorer::new(options).unwrap();
    assert!(matches!(
        scorer.score(&source),
        Err(ScoreError::NestingTooDeep { limit: 32 })
    ));
    assert!(compute_depth(&source, false).is_ok());
}

#[test]
fn test_default_limit_holds_near_the_edge() {
    // LC and SEMI, then one RP per level, then the NUMBER.
    let score = compute_depth(&nested("(", ")", 1000), false).unwrap();
    assert_eq!(score.depth, 1000 + 3);
    assert!(compute_depth(&nested("[", "]", 1000), false).is_ok());
    assert!(compute_depth(&nested("f(", ")", 1000), false).is_ok());
}

#[test]
fn test_default_limit_rejects_deeper_input() {
    for source in [
        nested("(", ")", 3000),
        nested("[", "]", 3000),
        nested("f(", ")", 3000),
    ] {
        assert!(matches!(
            compute_depth(&source, false),
            Err(ScoreError::NestingTooDeep { limit: 1024 })
        ));
    }
}

#[test]
fn test_scoring_is_repeatable() {
    let source = "var s = 'a' + b + c; if (s) { run(s, 1); }";
    let mut scorer = DepthScorer::new(ScoreOptions::default()).unwrap();
    let first = scorer.score(source).unwrap();
    let second = scorer.score(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.depth, compute_depth(source, false).unwrap().depth);
}

#[test]
fn test_trace_renders_with_indentation() {
    let trace = compute_depth("f(x)", true).unwrap().trace.unwrap();
    assert_eq!(trace.to_string(), "LC SEMI LP NAME NAME");
    assert_eq!(trace.render_indented(), "LC\n  SEMI\n    LP\n      NAME\n      NAME\n");
}
