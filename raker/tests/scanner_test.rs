//! Tests for comment raking through the public `Raker` API.
#![allow(clippy::unwrap_used)]

use raker::engine::{scan_comments, Raker, ScanStats};

/// Rake with the given predicate and return the resulting text.
fn rake_with(code: &str, should_remove: impl FnMut(&str) -> bool) -> String {
    let mut raker = Raker::new(code);
    raker.rake_comments(should_remove);
    raker.render().unwrap().code
}

fn rake_all(code: &str) -> String {
    rake_with(code, |_| true)
}

// =============================================================================
// Line comments
// =============================================================================

#[test]
fn test_own_line_comment_takes_the_line() {
    assert_eq!(rake_all("  // hello\ncode();"), "code();");
}

#[test]
fn test_trailing_line_comment_keeps_code_and_terminator() {
    assert_eq!(rake_all("a(); // call\nb();\n"), "a();\nb();\n");
}

#[test]
fn test_line_comment_ends_at_unicode_separator() {
    assert_eq!(rake_all("a(); // c\u{2028}b();"), "a();\u{2028}b();");
}

#[test]
fn test_line_comment_at_end_of_text() {
    assert_eq!(rake_all("a();\n// last"), "a();\n");
}

// =============================================================================
// Block comments
// =============================================================================

#[test]
fn test_own_line_block_comment_takes_the_line() {
    assert_eq!(rake_all("x();\n   /* c */  \ny();\n"), "x();\ny();\n");
}

#[test]
fn test_trailing_block_comment_absorbs_trailing_whitespace() {
    assert_eq!(rake_all("a(); /* c */   \nb();"), "a();\nb();");
}

#[test]
fn test_leading_inline_block_comment_keeps_indentation() {
    assert_eq!(rake_all("  /* c */ foo();"), "  foo();");
}

#[test]
fn test_inline_block_comment_after_code() {
    assert_eq!(rake_all("f(a, /* b */ c);"), "f(a, c);");
}

#[test]
fn test_consecutive_comments_on_one_line() {
    assert_eq!(rake_all("/* a */ /* b */\nx();"), "x();");
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    assert_eq!(rake_all("a(); /* never closed"), "a();");
}

#[test]
fn test_predicate_sees_literal_bodies() {
    let mut seen = Vec::new();
    rake_with("/* a */ x /** b */ y // c\n", |body| {
        seen.push(body.to_owned());
        false
    });
    assert_eq!(seen, vec!["/* a */", "/** b */"]);
}

#[test]
fn test_multibyte_text_around_comments() {
    assert_eq!(
        rake_all("const s = 'é'; /* ü */\nconst t = \"ß\";"),
        "const s = 'é';\nconst t = \"ß\";"
    );
}

// =============================================================================
// Strings and templates
// =============================================================================

#[test]
fn test_strings_are_opaque() {
    let code = "let s = \"//not a comment\"; let t = '/* nope */';";
    let mut calls = 0;
    let scan = scan_comments(code, |_| {
        calls += 1;
        true
    });
    assert_eq!(calls, 0);
    assert!(scan.removals.is_empty());
}

#[test]
fn test_escaped_quote_does_not_end_string() {
    let code = r#"let s = "a\" // still string"; // real"#;
    assert_eq!(rake_all(code), r#"let s = "a\" // still string";"#);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let code = "x = 'abc // not a comment";
    assert!(scan_comments(code, |_| true).removals.is_empty());
}

#[test]
fn test_template_substitution_is_rescanned() {
    assert_eq!(rake_all("`a${ /* x */ 1 }b`"), "`a${ 1 }b`");
}

#[test]
fn test_template_text_is_opaque() {
    let code = "`${ {} }// not comment`";
    assert!(scan_comments(code, |_| true).removals.is_empty());
}

#[test]
fn test_object_literal_braces_inside_substitution() {
    assert_eq!(
        rake_all("const s = `v${ {a: {b: 1}} }w`; // end"),
        "const s = `v${ {a: {b: 1}} }w`;"
    );
}

#[test]
fn test_nested_templates() {
    assert_eq!(
        rake_all("`x${ `y${ 1 /* in */ }` }z`"),
        "`x${ `y${ 1 }` }z`"
    );
}

// =============================================================================
// Blank lines and line terminators
// =============================================================================

#[test]
fn test_blank_line_runs_collapse_to_one_terminator() {
    assert_eq!(rake_all("a();\n\n\n\nb();\n"), "a();\nb();\n");
}

#[test]
fn test_crlf_counts_as_one_terminator() {
    assert_eq!(rake_all("a();\r\n\r\n\r\nb(); // c\r\n"), "a();\r\nb();\r\n");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_always_false_predicate() {
    let code = "a(); // one\n/* keep */\n\n\nb(); /* keep2 */ // two\n";
    let mut raker = Raker::new(code);
    let stats = raker.rake_comments(|_| false);
    let out = raker.render().unwrap().code;

    assert_eq!(out, "a();\n/* keep */\nb(); /* keep2 */\n");
    assert_eq!(
        stats,
        ScanStats {
            line_comments_removed: 2,
            block_comments_removed: 0,
            block_comments_kept: 2,
            blank_runs_collapsed: 1,
        }
    );

    let rescan = scan_comments(&out, |_| false);
    assert_eq!(rescan.stats.line_comments_removed, 0);
    assert!(rescan.removals.is_empty());
}

#[test]
fn test_nothing_to_rake_leaves_buffer_untouched() {
    let mut raker = Raker::new("let a = 1;\nlet b = 2;\n");
    let stats = raker.rake_comments(|_| true);
    assert_eq!(stats, ScanStats::default());
    assert!(!raker.has_changed());
    assert!(raker.buffer().edits().is_empty());
    assert!(raker.finish().unwrap().is_none());
}

#[test]
fn test_removals_are_ordered_and_disjoint() {
    let code = "/* a */\n\n// b\nx(); /* c */ y(); // d\n\n\n`${ /* e */ 1 }`\n";
    let scan = scan_comments(code, |_| true);
    for pair in scan.removals.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{} then {}", pair[0], pair[1]);
    }
    for span in &scan.removals {
        assert!(code.is_char_boundary(span.start) && code.is_char_boundary(span.end));
    }
}
