//! Position map between rendered and original text.

use serde::Serialize;

/// A stretch of text copied unchanged from the original into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Offset of the stretch in the rendered text
    pub generated: usize,
    /// Offset of the stretch in the original text
    pub original: usize,
    /// Length in bytes
    pub len: usize,
}

/// Byte-offset map produced by [`SourceBuffer::render`](super::SourceBuffer::render).
///
/// Offsets inside replacement text have no original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionMap {
    segments: Vec<Segment>,
}

impl PositionMap {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Unchanged stretches, ordered by position.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Original offset of the byte at `generated` in the rendered text.
    #[must_use]
    pub fn original_offset(&self, generated: usize) -> Option<usize> {
        let idx = self
            .segments
            .partition_point(|s| s.generated + s.len <= generated);
        let segment = self.segments.get(idx)?;
        (segment.generated <= generated).then(|| segment.original + (generated - segment.generated))
    }

    /// Rendered offset of the byte at `original`, if it survived the edits.
    #[must_use]
    pub fn generated_offset(&self, original: usize) -> Option<usize> {
        let idx = self
            .segments
            .partition_point(|s| s.original + s.len <= original);
        let segment = self.segments.get(idx)?;
        (segment.original <= original).then(|| segment.generated + (original - segment.original))
    }
}
