//! Node removal policy.
//!
//! Nodes are found by an external syntax-tree walker. For each one it hands
//! over the node's span and the category of its parent, and the policy picks
//! the single edit that removes the node without breaking the surrounding
//! syntax.

use crate::constants::{EMPTY_BLOCK_PLACEHOLDER, VOID_PLACEHOLDER};
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic position of a located node, derived from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ParentCategory {
    /// Directly in the program body
    ProgramRoot,
    /// Directly in a block statement
    BlockBody,
    /// The expression of an expression statement
    ExpressionStatement,
    /// Directly in a class `static { }` block
    StaticInitializerBlock,
    /// The expression body of an arrow function
    ArrowBody,
    /// Any other position
    OtherExpression,
}

impl ParentCategory {
    /// Classify a parent by name.
    ///
    /// Accepts both the kebab-case category names and `ESTree` node types
    /// (`Program`, `BlockStatement`, `ExpressionStatement`, `StaticBlock`,
    /// `ArrowFunctionExpression`). Anything else is an expression position.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match name {
            "program-root" | "Program" => Self::ProgramRoot,
            "block-body" | "BlockStatement" => Self::BlockBody,
            "expression-statement" | "ExpressionStatement" => Self::ExpressionStatement,
            "static-initializer-block" | "StaticBlock" => Self::StaticInitializerBlock,
            "arrow-body" | "ArrowFunctionExpression" => Self::ArrowBody,
            _ => Self::OtherExpression,
        }
    }

    /// Whether the node stands in statement position.
    #[must_use]
    pub const fn is_statement_like(self) -> bool {
        matches!(
            self,
            Self::ProgramRoot
                | Self::BlockBody
                | Self::ExpressionStatement
                | Self::StaticInitializerBlock
        )
    }

    /// Kebab-case name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProgramRoot => "program-root",
            Self::BlockBody => "block-body",
            Self::ExpressionStatement => "expression-statement",
            Self::StaticInitializerBlock => "static-initializer-block",
            Self::ArrowBody => "arrow-body",
            Self::OtherExpression => "other-expression",
        }
    }
}

impl From<String> for ParentCategory {
    fn from(name: String) -> Self {
        Self::classify(&name)
    }
}

impl From<&str> for ParentCategory {
    fn from(name: &str) -> Self {
        Self::classify(name)
    }
}

impl fmt::Display for ParentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The edit chosen for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RakeAction {
    /// Delete the node's text
    Remove,
    /// Replace the node's text with a placeholder
    Overwrite(&'static str),
}

impl RakeAction {
    /// Pick the edit for a node whose parent falls in `category`.
    #[must_use]
    pub const fn for_parent(category: ParentCategory) -> Self {
        match category {
            ParentCategory::ProgramRoot
            | ParentCategory::BlockBody
            | ParentCategory::ExpressionStatement
            | ParentCategory::StaticInitializerBlock => Self::Remove,
            ParentCategory::ArrowBody => Self::Overwrite(EMPTY_BLOCK_PLACEHOLDER),
            ParentCategory::OtherExpression => Self::Overwrite(VOID_PLACEHOLDER),
        }
    }
}

/// What a located node is, as reported by the walker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NodeKind {
    /// A `debugger` statement
    Debugger,
    /// A call to a `console` method
    ConsoleCall {
        /// Method name, e.g. `log`
        method: String,
    },
    /// Anything else the walker wants gone
    #[default]
    Other,
}

/// A node found by an external walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedNode {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Category of the node's parent
    pub parent: ParentCategory,
    /// Kind of node
    #[serde(default)]
    pub kind: NodeKind,
}

impl LocatedNode {
    /// The node's span.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Supplier of `(span, parent category)` pairs.
///
/// Any iterator over such pairs is a source, so a walker can be plugged in
/// with a plain `map` over its matches.
pub trait NodeSource {
    /// The next node to rake, or `None` when the walk is done.
    fn next_node(&mut self) -> Option<(Span, ParentCategory)>;
}

impl<I> NodeSource for I
where
    I: Iterator<Item = (Span, ParentCategory)>,
{
    fn next_node(&mut self) -> Option<(Span, ParentCategory)> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_positions_remove() {
        for category in [
            ParentCategory::ProgramRoot,
            ParentCategory::BlockBody,
            ParentCategory::ExpressionStatement,
            ParentCategory::StaticInitializerBlock,
        ] {
            assert!(category.is_statement_like());
            assert_eq!(RakeAction::for_parent(category), RakeAction::Remove);
        }
    }

    #[test]
    fn test_expression_positions_overwrite() {
        assert_eq!(
            RakeAction::for_parent(ParentCategory::ArrowBody),
            RakeAction::Overwrite("{}")
        );
        assert_eq!(
            RakeAction::for_parent(ParentCategory::OtherExpression),
            RakeAction::Overwrite("(void 0)")
        );
    }

    #[test]
    fn test_classify_estree_and_unknown() {
        assert_eq!(ParentCategory::classify("Program"), ParentCategory::ProgramRoot);
        assert_eq!(ParentCategory::classify("StaticBlock"), ParentCategory::StaticInitializerBlock);
        assert_eq!(
            ParentCategory::classify("ArrowFunctionExpression"),
            ParentCategory::ArrowBody
        );
        assert_eq!(
            ParentCategory::classify("CallExpression"),
            ParentCategory::OtherExpression
        );
        assert_eq!(ParentCategory::classify("block-body"), ParentCategory::BlockBody);
    }

    #[test]
    fn test_located_node_json() {
        let nodes: Vec<LocatedNode> = serde_json::from_str(
            r#"[
                {"start": 0, "end": 9, "parent": "ExpressionStatement", "kind": {"type": "debugger"}},
                {"start": 12, "end": 26, "parent": "arrow-body", "kind": {"type": "console-call", "method": "log"}},
                {"start": 30, "end": 34, "parent": "ConditionalExpression"}
            ]"#,
        )
        .unwrap();

        assert_eq!(nodes[0].parent, ParentCategory::ExpressionStatement);
        assert_eq!(nodes[0].kind, NodeKind::Debugger);
        assert_eq!(
            nodes[1].kind,
            NodeKind::ConsoleCall {
                method: "log".to_owned()
            }
        );
        assert_eq!(nodes[2].parent, ParentCategory::OtherExpression);
        assert_eq!(nodes[2].kind, NodeKind::Other);
        assert_eq!(nodes[1].span(), Span::new(12, 26));
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&ParentCategory::StaticInitializerBlock).unwrap();
        assert_eq!(json, "\"static-initializer-block\"");
    }
}
