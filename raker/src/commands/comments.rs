//! `comments` subcommand: remove comments and collapse blank-line runs.

use super::utils::{read_source, write_rendered};
use super::{FileReport, RakeSummary};
use crate::buffer::{BufferError, Rendered};
use crate::engine::{Raker, ScanStats};
use crate::output;
use crate::policy::CommentPolicy;
use crate::utils::{collect_source_files, normalize_display_path};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for the comments subcommand
#[derive(Debug, Clone, Default)]
pub struct CommentsOptions {
    /// Which block comments survive
    pub policy: CommentPolicy,
    /// Write the raked text back to the files
    pub apply: bool,
    /// Write position maps next to written files
    pub map: bool,
    /// Print the raked text instead of a report
    pub stdout: bool,
    /// Output JSON
    pub json: bool,
    /// Summary only
    pub quiet: bool,
    /// Verbose output
    pub verbose: bool,
    /// Folders to exclude from the walk
    pub exclude_folders: Vec<String>,
    /// Folders to force-include
    pub include_folders: Vec<String>,
    /// Extensions to pick up when walking directories
    pub extensions: Vec<String>,
}

/// Rake comments out of one text under `policy`.
///
/// Returns `None` for the text when nothing was removed.
///
/// # Errors
///
/// Returns an error if the recorded removals cannot be rendered.
pub fn rake_source(
    code: &str,
    policy: &CommentPolicy,
) -> Result<(Option<Rendered>, ScanStats), BufferError> {
    let mut raker = Raker::new(code);
    let stats = raker.rake_comments(|comment| policy.should_remove(comment));
    Ok((raker.finish()?, stats))
}

/// Expand the given paths into the files to rake.
///
/// Explicit files are kept whatever their extension; directories are walked.
fn gather_files(paths: &[PathBuf], options: &CommentsOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else {
            let (found, dirs) = collect_source_files(
                path,
                &options.exclude_folders,
                &options.include_folders,
                &options.extensions,
                options.verbose,
            );
            if options.verbose && !options.json {
                eprintln!(
                    "[VERBOSE] {}: {} files in {} directories",
                    normalize_display_path(path),
                    found.len(),
                    dirs
                );
            }
            files.extend(found);
        }
    }
    files.dedup();
    files
}

fn rake_file(file: &Path, options: &CommentsOptions) -> FileReport {
    let display = normalize_display_path(file);
    let code = match read_source(file) {
        Ok(code) => code,
        Err(e) => return FileReport::failed(display, format!("{e:#}")),
    };

    let (rendered, stats) = match rake_source(&code, &options.policy) {
        Ok(result) => result,
        Err(e) => return FileReport::failed(display, e),
    };

    let mut report = FileReport {
        file: display,
        changed: rendered.is_some(),
        bytes_before: code.len(),
        bytes_after: rendered.as_ref().map_or(code.len(), |r| r.code.len()),
        comments: Some(stats),
        ..FileReport::default()
    };

    if let (true, Some(rendered)) = (options.apply, rendered.as_ref()) {
        match write_rendered(file, rendered, options.map) {
            Ok(()) => report.written = true,
            Err(e) => report.error = Some(format!("{e:#}")),
        }
    }

    if options.verbose && !options.json {
        eprintln!(
            "[VERBOSE] {}: {} line, {} block removed, {} kept",
            report.file,
            stats.line_comments_removed,
            stats.block_comments_removed,
            stats.block_comments_kept
        );
    }
    report
}

/// Run the comments subcommand over `paths`.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run_comments<W: Write>(
    paths: &[PathBuf],
    options: &CommentsOptions,
    writer: &mut W,
) -> Result<i32> {
    let files = gather_files(paths, options);

    if options.stdout {
        let [file] = files.as_slice() else {
            eprintln!(
                "{} --stdout takes exactly one file ({} found)",
                "Error:".red(),
                files.len()
            );
            return Ok(1);
        };
        let code = read_source(file)?;
        let (rendered, _) = rake_source(&code, &options.policy)?;
        write!(writer, "{}", rendered.map_or(code, |r| r.code))?;
        return Ok(0);
    }

    if !options.json && !options.quiet {
        output::print_exclusion_list(writer, &options.exclude_folders)?;
    }

    let progress = output::create_progress_bar(files.len() as u64, options.json || files.len() < 2);
    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|file| {
            let report = rake_file(file, options);
            progress.inc(1);
            report
        })
        .collect();
    progress.finish_and_clear();

    let summary = RakeSummary::new(reports, options.apply);

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else if options.quiet {
        output::print_report_quiet(writer, &summary)?;
    } else {
        output::print_report(writer, &summary)?;
    }

    Ok(summary.exit_code())
}
