//! Byte-range source buffer.
//!
//! Edits are recorded against the original text and applied in a single
//! forward pass by [`SourceBuffer::render`], which also produces a
//! [`PositionMap`] for the untouched stretches of text.
//!
//! # Usage
//!
//! ```
//! use raker::buffer::SourceBuffer;
//!
//! let mut buffer = SourceBuffer::new("hello brave world");
//! buffer.remove(5, 11);
//! buffer.overwrite(12, 17, "there");
//! let rendered = buffer.render().expect("should render");
//! assert_eq!(rendered.code, "hello there");
//! ```

use super::map::{PositionMap, Segment};
use crate::span::Span;

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Range of the original text being replaced
    pub span: Span,
    /// Replacement content (empty for removals)
    pub replacement: String,
}

impl Edit {
    /// Create a new edit
    #[must_use]
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            span: Span::new(start, end),
            replacement: replacement.into(),
        }
    }

    /// Create a removal edit
    #[must_use]
    pub fn remove(start: usize, end: usize) -> Self {
        Self::new(start, end, "")
    }

    /// Whether applying this edit leaves the text as it was.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.span.is_empty() && self.replacement.is_empty()
    }

    /// Check if this edit overlaps with another
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.span.overlaps(&other.span)
    }
}

/// Contract violation detected while rendering a buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Two edits target overlapping ranges
    #[error("overlapping edits at indices {edit_a} and {edit_b}")]
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit range lies outside the source
    #[error("edit {edit_index} out of bounds: {span} exceeds source length {source_len}")]
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// Range of the bad edit
        span: Span,
        /// Length of the source
        source_len: usize,
    },
    /// Edit boundary splits a multi-byte character
    #[error("edit {edit_index} does not fall on a character boundary at byte {offset}")]
    NotCharBoundary {
        /// Index of the bad edit
        edit_index: usize,
        /// Offending offset
        offset: usize,
    },
}

/// Output of [`SourceBuffer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The edited text
    pub code: String,
    /// Mapping from offsets in `code` back to the original text
    pub map: PositionMap,
}

/// Original text plus the edits recorded against it.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    original: String,
    edits: Vec<Edit>,
}

impl SourceBuffer {
    /// Create a new buffer for the given source
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            original: source.into(),
            edits: Vec::new(),
        }
    }

    /// The text the buffer was created with.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Record the removal of `[start, end)`. Empty ranges are ignored.
    pub fn remove(&mut self, start: usize, end: usize) {
        if start < end {
            self.edits.push(Edit::remove(start, end));
        }
    }

    /// Record the replacement of `[start, end)` with `replacement`.
    ///
    /// An empty range turns into an insertion at `start`.
    pub fn overwrite(&mut self, start: usize, end: usize, replacement: impl Into<String>) {
        let edit = Edit::new(start, end, replacement);
        if !edit.is_noop() {
            self.edits.push(edit);
        }
    }

    /// Recorded edits, in the order they were issued.
    #[must_use]
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Whether any recorded edit alters the text.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.edits.iter().any(|edit| !edit.is_noop())
    }

    /// Validate edits without applying them
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds, or split a character
    pub fn validate(&self) -> Result<(), BufferError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.span.start > edit.span.end || edit.span.end > self.original.len() {
                return Err(BufferError::OutOfBounds {
                    edit_index: i,
                    span: edit.span,
                    source_len: self.original.len(),
                });
            }
            for offset in [edit.span.start, edit.span.end] {
                if !self.original.is_char_boundary(offset) {
                    return Err(BufferError::NotCharBoundary {
                        edit_index: i,
                        offset,
                    });
                }
            }
        }

        // After sorting by start, an edit can only overlap the one reaching
        // furthest among those before it.
        let order = self.sorted_order();
        let mut furthest: Option<usize> = None;
        for &i in &order {
            if let Some(prev) = furthest {
                if self.edits[prev].overlaps(&self.edits[i]) {
                    return Err(BufferError::OverlappingEdits {
                        edit_a: prev.min(i),
                        edit_b: prev.max(i),
                    });
                }
                if self.edits[i].span.end > self.edits[prev].span.end {
                    furthest = Some(i);
                }
            } else {
                furthest = Some(i);
            }
        }

        Ok(())
    }

    /// Apply all edits and return the final text with its position map.
    ///
    /// # Errors
    /// Returns error if edits overlap, are out of bounds, or split a character
    pub fn render(&self) -> Result<Rendered, BufferError> {
        self.validate()?;

        let mut code = String::with_capacity(self.original.len());
        let mut segments = Vec::new();
        let mut cursor = 0;

        for i in self.sorted_order() {
            let edit = &self.edits[i];
            if edit.span.start > cursor {
                segments.push(Segment {
                    generated: code.len(),
                    original: cursor,
                    len: edit.span.start - cursor,
                });
                code.push_str(&self.original[cursor..edit.span.start]);
            }
            code.push_str(&edit.replacement);
            cursor = cursor.max(edit.span.end);
        }

        if cursor < self.original.len() {
            segments.push(Segment {
                generated: code.len(),
                original: cursor,
                len: self.original.len() - cursor,
            });
            code.push_str(&self.original[cursor..]);
        }

        Ok(Rendered {
            code,
            map: PositionMap::new(segments),
        })
    }

    /// Indices of the edits ordered by start, insertions before removals at
    /// the same offset.
    fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| (self.edits[i].span.start, self.edits[i].span.end));
        order
    }
}
