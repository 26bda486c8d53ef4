//! Tests for node raking: removal policy, node sources and strip policy.
#![allow(clippy::unwrap_used)]

use raker::buffer::BufferError;
use raker::engine::{LocatedNode, NodeKind, NodeSource, ParentCategory, RakeAction, Raker};
use raker::policy::{KeepConsole, StripPolicy};
use raker::span::Span;

fn rake_one(code: &str, span: Span, parent: ParentCategory) -> String {
    let mut raker = Raker::new(code);
    raker.rake_node(span, parent);
    raker.finish().unwrap().unwrap().code
}

#[test]
fn test_statement_position_removes_exact_span() {
    let code = "foo();\nbar();";
    for parent in [
        ParentCategory::ProgramRoot,
        ParentCategory::BlockBody,
        ParentCategory::ExpressionStatement,
        ParentCategory::StaticInitializerBlock,
    ] {
        assert_eq!(rake_one(code, Span::new(0, 5), parent), ";\nbar();");
    }
}

#[test]
fn test_expression_position_overwrites_with_void() {
    assert_eq!(
        rake_one("x = debugCall();", Span::new(4, 15), ParentCategory::OtherExpression),
        "x = (void 0);"
    );
}

#[test]
fn test_arrow_body_overwrites_with_empty_block() {
    assert_eq!(
        rake_one("const f = () => log(1);", Span::new(16, 22), ParentCategory::ArrowBody),
        "const f = () => {};"
    );
}

#[test]
fn test_rake_node_reports_action() {
    let mut raker = Raker::new("a(b(c));");
    assert_eq!(
        raker.rake_node(Span::new(2, 6), ParentCategory::OtherExpression),
        RakeAction::Overwrite("(void 0)")
    );
    assert_eq!(
        RakeAction::for_parent(ParentCategory::ProgramRoot),
        RakeAction::Remove
    );
}

#[test]
fn test_unknown_parent_is_expression_position() {
    assert_eq!(
        ParentCategory::classify("CallExpression"),
        ParentCategory::OtherExpression
    );
    assert_eq!(
        ParentCategory::classify("StaticBlock"),
        ParentCategory::StaticInitializerBlock
    );
    assert!(!ParentCategory::from("whatever").is_statement_like());
}

#[test]
fn test_no_nodes_no_change() {
    let mut raker = Raker::new("keep();");
    let raked = raker.rake_nodes(std::iter::empty());
    assert_eq!(raked, 0);
    assert!(!raker.has_changed());
    assert!(raker.finish().unwrap().is_none());
}

/// A walker that hands out pre-located nodes one by one.
struct ListWalker {
    nodes: Vec<(usize, usize, &'static str)>,
}

impl NodeSource for ListWalker {
    fn next_node(&mut self) -> Option<(Span, ParentCategory)> {
        let (start, end, parent) = self.nodes.pop()?;
        Some((Span::new(start, end), ParentCategory::classify(parent)))
    }
}

#[test]
fn test_custom_node_source() {
    let code = "debugger;\nconst f = () => trace();\nrun(log());\n";
    let walker = ListWalker {
        nodes: vec![
            (0, 9, "Program"),
            (26, 33, "ArrowFunctionExpression"),
            (39, 44, "CallExpression"),
        ],
    };
    assert_eq!(&code[26..33], "trace()");
    assert_eq!(&code[39..44], "log()");

    let mut raker = Raker::new(code);
    assert_eq!(raker.rake_nodes(walker), 3);
    assert_eq!(
        raker.finish().unwrap().unwrap().code,
        "\nconst f = () => {};\nrun((void 0));\n"
    );
}

#[test]
fn test_nested_nodes_rake_outermost_only() {
    let code = "if (x) { console.log(1); }";
    let nodes = vec![
        (Span::new(9, 23), ParentCategory::ExpressionStatement),
        (Span::new(0, 26), ParentCategory::ProgramRoot),
        (Span::new(21, 22), ParentCategory::OtherExpression),
    ];
    let mut raker = Raker::new(code);
    assert_eq!(raker.rake_nodes(nodes.into_iter()), 1);
    assert_eq!(raker.finish().unwrap().unwrap().code, "");
}

#[test]
fn test_node_overlapping_a_comment_removal_is_a_buffer_error() {
    let mut raker = Raker::new("a(); // note\n");
    raker.rake_comments(|_| true);
    raker.rake_node(Span::new(3, 8), ParentCategory::BlockBody);
    assert!(matches!(
        raker.render(),
        Err(BufferError::OverlappingEdits { .. })
    ));
}

#[test]
fn test_strip_policy_selects_nodes() {
    let code = "debugger;\nconsole.log(1);\nconsole.warn(2);\n";
    let nodes: Vec<LocatedNode> = serde_json::from_str(
        r#"[
  {"start": 0, "end": 9, "parent": "program-root", "kind": {"type": "debugger"}},
  {"start": 10, "end": 24, "parent": "expression-statement", "kind": {"type": "console-call", "method": "log"}},
  {"start": 26, "end": 41, "parent": "expression-statement", "kind": {"type": "console-call", "method": "warn"}}
]"#,
    )
    .unwrap();
    assert_eq!(nodes[0].kind, NodeKind::Debugger);

    let policy = StripPolicy {
        keep_console: KeepConsole::Methods(vec!["warn".to_owned()]),
        keep_debugger: false,
    };
    let mut raker = Raker::new(code);
    assert_eq!(raker.rake_nodes(policy.select(&nodes)), 2);
    assert_eq!(
        raker.finish().unwrap().unwrap().code,
        "\n;\nconsole.warn(2);\n"
    );
}

#[test]
fn test_comments_and_nodes_together() {
    let code = "// header\ndebugger;\nx(); /* tail */\n";
    let mut raker = Raker::new(code);
    raker.rake_comments(|_| true);
    raker.rake_node(Span::new(10, 19), ParentCategory::ProgramRoot);
    assert_eq!(raker.finish().unwrap().unwrap().code, "\nx();\n");
}
