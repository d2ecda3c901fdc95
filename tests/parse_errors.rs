//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify the stable two-tier error contract across all four parsers.
//! Invariants: Syntax failures never leak schema names; logical failures always do.
//! Invariants: Category mapping remains deterministic for representative inputs.

use tourist_format::api::{
    ParseError, ParseErrorKind, parse_index, parse_link, parse_stop, parse_tour,
};

#[test]
fn empty_input_is_a_syntax_error_for_every_parser() {
    assert_eq!(parse_link(""), Err(ParseError::json()));
    assert_eq!(parse_stop(""), Err(ParseError::json()));
    assert_eq!(parse_tour(""), Err(ParseError::json()));
    assert_eq!(parse_index(""), Err(ParseError::json()));
}

#[test]
fn malformed_json_is_a_syntax_error() {
    let cases = ["{", "[1,", r#"{"id":"#, "tour", "{]"];

    for case in cases {
        let err = parse_tour(case).expect_err("must fail");
        assert_eq!(err.kind(), ParseErrorKind::Json, "input: {case:?}");
        assert_eq!(err.schema(), None, "input: {case:?}");
    }
}

#[test]
fn empty_object_maps_to_each_schema_name() {
    assert_eq!(parse_link("{}"), Err(ParseError::logical("Link")));
    assert_eq!(parse_stop("{}"), Err(ParseError::logical("Stop")));
    assert_eq!(parse_tour("{}"), Err(ParseError::logical("Tour")));
    assert_eq!(parse_index("{}"), Err(ParseError::logical("Index")));
}

#[test]
fn wrong_primitive_kind_is_logical() {
    // String where a number is expected.
    let text = r#"{"id":"S","title":"t","body":"b","line":"42","relPath":"p","repository":"R","children":[]}"#;
    assert_eq!(parse_stop(text), Err(ParseError::logical("Stop")));

    // Number where a string is expected.
    let text = r#"{"tour":1,"stop":"S"}"#;
    assert_eq!(parse_link(text), Err(ParseError::logical("Link")));
}

#[test]
fn keyed_object_pair_list_is_rejected() {
    // Pair lists are arrays of pairs on the wire; a keyed object does not parse.
    let text = r#"{"index":{"REPO":"/path/to/repo"}}"#;
    assert_eq!(parse_index(text), Err(ParseError::logical("Index")));
}

#[test]
fn failing_nested_element_fails_with_the_outer_name() {
    let text = r#"{"id":"S","title":"t","body":"b","line":1,"relPath":"p","repository":"R","children":[{"tour":"T"}]}"#;
    assert_eq!(parse_stop(text), Err(ParseError::logical("Stop")));
}

#[test]
fn valid_json_with_non_object_root_is_logical() {
    for text in ["[]", "null", "true", "7", r#""tour""#] {
        assert_eq!(
            parse_tour(text),
            Err(ParseError::logical("Tour")),
            "input: {text:?}"
        );
    }
}

#[test]
fn extra_fields_do_not_fail_validation() {
    let text = r#"{"tour":"T","stop":"S","note":"ignored","depth":3}"#;
    let link = parse_link(text).expect("parse");
    assert_eq!(link.tour, "T");
    assert_eq!(link.stop, "S");
}
