//! Integration tests for placeholder reset and scanning.

use varfill::{reset_default, reset_placeholders, scan_placeholders};

// =============================================================================
// Removal
// =============================================================================

#[test]
fn removes_valid_and_keeps_malformed() {
    assert_eq!(
        reset_placeholders("{valid.name} {not valid}", "{", "}"),
        " {not valid}"
    );
}

#[test]
fn removes_leftovers_after_substitution() {
    assert_eq!(reset_default("1{b}"), "1");
}

#[test]
fn keeps_json_like_blocks() {
    let json = r#"var config = {"a": 1}; {unused}"#;
    assert_eq!(reset_default(json), r#"var config = {"a": 1}; "#);
}

#[test]
fn keeps_empty_braces() {
    assert_eq!(reset_default("fn() {}"), "fn() {}");
}

#[test]
fn custom_markers() {
    assert_eq!(
        reset_placeholders("<<%a%>> stays {a} <<%b c%>>", "<<%", "%>>"),
        " stays {a} <<%b c%>>"
    );
}

#[test]
fn token_spanning_a_line_break_is_kept() {
    assert_eq!(reset_default("{a\nb} {c}"), "{a\nb} ");
}

#[test]
fn empty_markers_leave_the_template_unchanged() {
    assert_eq!(reset_placeholders("{a}", "", ""), "{a}");
}

// =============================================================================
// Pass-through and idempotence
// =============================================================================

#[test]
fn template_without_placeholders_is_unchanged() {
    for input in ["", "plain text", "{not valid}", "{a-b}", "{ spaced }", "unterminated {a"] {
        assert_eq!(reset_default(input), input);
    }
}

#[test]
fn applying_twice_equals_applying_once() {
    for input in [
        "{a}{b}",
        "{valid.name} {not valid}",
        "{a{x}b} {x}",
        "{{a}}",
        "{a}}{",
        "x{y.z}{0}{_}",
    ] {
        let once = reset_default(input);
        assert_eq!(reset_default(&once), once, "input: {input:?}");
    }
}

// =============================================================================
// Scanning
// =============================================================================

#[test]
fn scan_reports_offsets_and_raw_tokens() {
    let found = scan_placeholders("ab {x} {y z}", "{", "}");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].raw, "{x}");
    assert_eq!(found[0].offset, 3);
    assert!(found[0].is_identifier());
    assert_eq!(found[1].name, "y z");
    assert!(!found[1].is_identifier());
}

#[test]
fn scan_handles_multibyte_text() {
    let found = scan_placeholders("h\u{e9}llo {n\u{e4}me} {name}", "{", "}");
    let names: Vec<&str> = found.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["n\u{e4}me", "name"]);
    assert!(!found[0].is_identifier());
    assert_eq!(reset_default("h\u{e9}llo {n\u{e4}me} {name}"), "h\u{e9}llo {n\u{e4}me} ");
}
