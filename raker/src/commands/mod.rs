//! Commands module - CLI subcommand implementations.
//!
//! Both subcommands rake a set of files into per-file [`FileReport`]s and
//! share the writing, mapping and reporting helpers in `utils`.

mod comments;
mod strip;
mod utils;

pub use comments::{rake_source, run_comments, CommentsOptions};
pub use strip::{load_nodes, run_strip, StripOptions};
pub use utils::map_path;

use crate::engine::ScanStats;
use serde::Serialize;

/// Outcome of raking one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    /// Display path of the file
    pub file: String,
    /// Whether raking changed the text
    pub changed: bool,
    /// Whether the raked text was written back
    pub written: bool,
    /// Size of the original text in bytes
    pub bytes_before: usize,
    /// Size of the raked text in bytes
    pub bytes_after: usize,
    /// Comment statistics (comments subcommand)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<ScanStats>,
    /// Number of nodes raked (strip subcommand)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_raked: Option<usize>,
    /// Why the file could not be raked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Report for a file that failed before or during raking.
    #[must_use]
    pub fn failed(file: String, error: impl std::fmt::Display) -> Self {
        Self {
            file,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Aggregate over every raked file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RakeSummary {
    /// Whether files were written (`--apply`)
    pub applied: bool,
    /// Files considered
    pub total_files: usize,
    /// Files whose text changed
    pub changed_files: usize,
    /// Bytes removed across all files
    pub bytes_saved: usize,
    /// Comment statistics summed over all files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<ScanStats>,
    /// Nodes raked across all files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_raked: Option<usize>,
    /// Files that failed
    pub errors: usize,
    /// Per-file reports, in walk order
    pub files: Vec<FileReport>,
}

impl RakeSummary {
    /// Summarize per-file reports.
    #[must_use]
    pub fn new(files: Vec<FileReport>, applied: bool) -> Self {
        let mut summary = Self {
            applied,
            total_files: files.len(),
            ..Self::default()
        };
        for report in &files {
            if report.error.is_some() {
                summary.errors += 1;
                continue;
            }
            if report.changed {
                summary.changed_files += 1;
            }
            summary.bytes_saved += report.bytes_before.saturating_sub(report.bytes_after);
            if let Some(stats) = report.comments {
                *summary.comments.get_or_insert_with(ScanStats::default) += stats;
            }
            if let Some(raked) = report.nodes_raked {
                *summary.nodes_raked.get_or_insert(0) += raked;
            }
        }
        summary.files = files;
        summary
    }

    /// Exit code for the run: 1 when any file failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.errors > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_aggregates() {
        let stats = ScanStats {
            line_comments_removed: 2,
            block_comments_removed: 1,
            block_comments_kept: 0,
            blank_runs_collapsed: 1,
        };
        let files = vec![
            FileReport {
                file: "a.js".to_owned(),
                changed: true,
                bytes_before: 40,
                bytes_after: 25,
                comments: Some(stats),
                ..FileReport::default()
            },
            FileReport {
                file: "b.js".to_owned(),
                bytes_before: 10,
                bytes_after: 10,
                comments: Some(ScanStats::default()),
                ..FileReport::default()
            },
            FileReport::failed("c.js".to_owned(), "denied"),
        ];

        let summary = RakeSummary::new(files, false);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.changed_files, 1);
        assert_eq!(summary.bytes_saved, 15);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.comments, Some(stats));
        assert_eq!(summary.nodes_raked, None);
        assert_eq!(summary.exit_code(), 1);
    }
}
