//! Removal policies.
//!
//! The engine only asks yes/no questions: "remove this block comment?" and
//! "rake this node?". The policies here answer them from user options.

mod comments;
mod strip;

pub use comments::{CommentClass, CommentPolicy};
pub use strip::{KeepConsole, StripPolicy};
