//! Which located nodes get raked.

use crate::constants::CONSOLE_METHODS;
use crate::engine::{LocatedNode, NodeKind, ParentCategory};
use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Which `console` calls to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeepConsole {
    /// Keep all (`true`) or none (`false`)
    All(bool),
    /// Keep calls to these methods, remove the other known ones
    Methods(Vec<String>),
}

impl Default for KeepConsole {
    fn default() -> Self {
        Self::All(false)
    }
}

/// Options deciding which located nodes are raked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripPolicy {
    /// Console calls to keep
    pub keep_console: KeepConsole,
    /// Keep `debugger` statements
    pub keep_debugger: bool,
}

impl StripPolicy {
    /// Whether a call to `console.<method>` should be removed.
    ///
    /// With a method list, only methods the global `console` actually has
    /// are removed, so `console.custom()` survives.
    #[must_use]
    pub fn should_remove_console_call(&self, method: &str) -> bool {
        match &self.keep_console {
            KeepConsole::All(keep) => !keep,
            KeepConsole::Methods(kept) => {
                CONSOLE_METHODS().contains(method) && !kept.iter().any(|m| m == method)
            }
        }
    }

    /// Whether a node of this kind should be raked.
    #[must_use]
    pub fn should_rake(&self, kind: &NodeKind) -> bool {
        match kind {
            NodeKind::Debugger => !self.keep_debugger,
            NodeKind::ConsoleCall { method } => self.should_remove_console_call(method),
            NodeKind::Other => true,
        }
    }

    /// The nodes to rake, as a source for
    /// [`Raker::rake_nodes`](crate::engine::Raker::rake_nodes).
    pub fn select<'a>(
        &'a self,
        nodes: &'a [LocatedNode],
    ) -> impl Iterator<Item = (Span, ParentCategory)> + 'a {
        nodes
            .iter()
            .filter(|node| self.should_rake(&node.kind))
            .map(|node| (node.span(), node.parent))
    }
}
