//! Editable source buffer.
//!
//! The raking engine never splices text itself. It records edits against
//! the original source here, and the buffer renders the final text together
//! with a position map back into the original.
//!
//! The core component is `SourceBuffer`, which collects byte-range edits
//! and applies them in one pass when rendered.

mod map;
mod rewriter;

pub use map::{PositionMap, Segment};
pub use rewriter::{BufferError, Edit, Rendered, SourceBuffer};
