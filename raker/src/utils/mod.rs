//! Utilities module for raker.
//!
//! This module provides various utility functions used across the codebase.

mod paths;

pub use paths::{collect_source_files, has_source_extension, is_excluded, normalize_display_path};

use crate::engine::lexical::is_line_terminator;

/// A utility struct to convert byte offsets to line numbers.
///
/// Raked spans are byte offsets, reports show 1-indexed lines.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for line terminators.
    /// `\r\n` counts as a single break.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if !is_line_terminator(c) {
                continue;
            }
            if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
                chars.next();
                line_starts.push(i + 2);
            } else {
                line_starts.push(i + c.len_utf8());
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line_index(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Number of lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Merges the configured and command-line folder lists, dropping duplicates.
pub fn merge_folders(config: Option<&[String]>, cli: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = config.unwrap_or_default().to_vec();
    for folder in cli {
        if !merged.contains(folder) {
            merged.push(folder.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("a\nbc\r\nd\u{2028}e");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_index(0), 1);
        assert_eq!(index.line_index(1), 1);
        assert_eq!(index.line_index(2), 2);
        assert_eq!(index.line_index(6), 3);
        // after U+2028 (3 bytes at offset 7)
        assert_eq!(index.line_index(10), 4);
    }

    #[test]
    fn test_merge_folders() {
        let config = vec!["vendor".to_owned(), "out".to_owned()];
        let merged = merge_folders(Some(&config), &["out".to_owned(), "tmp".to_owned()]);
        assert_eq!(merged, vec!["vendor", "out", "tmp"]);
        assert_eq!(merge_folders(None, &[]), Vec::<String>::new());
    }
}
