//! The raking engine.
//!
//! [`Raker`] owns a [`SourceBuffer`] for one text and drives two kinds of
//! removal into it:
//! - comments and blank-line runs, found by the lexical [`scanner`];
//! - nodes located by an external walker, removed or neutralized by the
//!   node policy in [`node`].
//!
//! Each text gets its own `Raker`; nothing is shared between instances.

pub mod lexical;
pub mod node;
pub mod scanner;

pub use node::{LocatedNode, NodeKind, NodeSource, ParentCategory, RakeAction};
pub use scanner::{scan_comments, CommentScan, ScanStats};

use crate::buffer::{BufferError, Rendered, SourceBuffer};
use crate::span::Span;

/// Rakes comments and located nodes out of a single source text.
///
/// ```
/// use raker::engine::{ParentCategory, Raker};
/// use raker::span::Span;
///
/// let mut raker = Raker::new("run(); // done\nconsole.log(1);\n");
/// raker.rake_comments(|_| true);
/// raker.rake_node(Span::new(15, 29), ParentCategory::ExpressionStatement);
/// let rendered = raker.finish().unwrap().unwrap();
/// assert_eq!(rendered.code, "run();\n;\n");
/// ```
#[derive(Debug, Clone)]
pub struct Raker {
    buffer: SourceBuffer,
}

impl Raker {
    /// Create a raker over `code`.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            buffer: SourceBuffer::new(code),
        }
    }

    /// The text being raked.
    #[must_use]
    pub fn original(&self) -> &str {
        self.buffer.original()
    }

    /// The underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    /// Remove every line comment, every block comment `should_remove`
    /// accepts, and every run of blank lines.
    pub fn rake_comments<P>(&mut self, should_remove: P) -> ScanStats
    where
        P: FnMut(&str) -> bool,
    {
        let scan = scan_comments(self.buffer.original(), should_remove);
        for span in scan.removals {
            self.buffer.remove(span.start, span.end);
        }
        scan.stats
    }

    /// Remove or neutralize one located node, depending on where it sits.
    pub fn rake_node(&mut self, span: Span, parent: ParentCategory) -> RakeAction {
        let action = RakeAction::for_parent(parent);
        match action {
            RakeAction::Remove => self.buffer.remove(span.start, span.end),
            RakeAction::Overwrite(placeholder) => {
                self.buffer.overwrite(span.start, span.end, placeholder);
            }
        }
        action
    }

    /// Rake every node `source` yields and return how many were raked.
    ///
    /// Nodes nested inside an already raked node are skipped, the way a
    /// walker skips the children of a node it has handled.
    pub fn rake_nodes<S>(&mut self, mut source: S) -> usize
    where
        S: NodeSource,
    {
        let mut nodes = Vec::new();
        while let Some(node) = source.next_node() {
            nodes.push(node);
        }
        // Outermost first: earlier start, then longer span.
        nodes.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut raked: Vec<Span> = Vec::new();
        for (span, parent) in nodes {
            if raked.iter().any(|r| r.contains(&span) || r.overlaps(&span)) {
                continue;
            }
            self.rake_node(span, parent);
            raked.push(span);
        }
        raked.len()
    }

    /// Whether any edit has been recorded.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.buffer.has_changed()
    }

    /// Render the edited text and its position map.
    ///
    /// # Errors
    /// Returns error if edits overlap or fall outside the text
    pub fn render(&self) -> Result<Rendered, BufferError> {
        self.buffer.render()
    }

    /// Render only when something changed; `None` means the input stands.
    ///
    /// # Errors
    /// Returns error if edits overlap or fall outside the text
    pub fn finish(self) -> Result<Option<Rendered>, BufferError> {
        if self.has_changed() {
            self.render().map(Some)
        } else {
            Ok(None)
        }
    }
}
