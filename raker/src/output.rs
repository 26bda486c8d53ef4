use crate::commands::{FileReport, RakeSummary};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Print the exclusion list in styled format.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_exclusion_list(writer: &mut impl Write, folders: &[String]) -> std::io::Result<()> {
    if folders.is_empty() {
        let defaults = crate::constants::DEFAULT_EXCLUDE_FOLDERS();
        let mut sorted_defaults: Vec<&str> = defaults.iter().copied().collect();
        sorted_defaults.sort_unstable();
        writeln!(
            writer,
            "{} {}",
            "[OK] Using default exclusions only:".green(),
            sorted_defaults.join(", ").dimmed()
        )?;
    } else {
        writeln!(writer, "{} {}", "Excluding:".yellow().bold(), folders.join(", "))?;
    }
    Ok(())
}

/// Create a progress bar with file count.
///
/// Returns a hidden bar in test mode or when `hidden` is set (JSON output, single file).
#[must_use]
pub fn create_progress_bar(total_files: u64, hidden: bool) -> ProgressBar {
    if cfg!(test) || hidden {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("raking...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.tick();
    pb
}

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write, applied: bool) -> std::io::Result<()> {
    let title = if applied {
        "║  Raked Files                           ║"
    } else {
        "║  Raking Preview (dry run)              ║"
    };
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(writer, "{}", title.cyan().bold())?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print summary with colored "pills".
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary_pills(writer: &mut impl Write, summary: &RakeSummary) -> std::io::Result<()> {
    fn pill(label: &str, count: usize) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().dimmed())
        } else {
            format!("{}: {}", label, count.to_string().green().bold())
        }
    }

    let mut pills = vec![
        pill("Files", summary.total_files),
        pill("Changed", summary.changed_files),
        pill("Bytes saved", summary.bytes_saved),
    ];
    if let Some(stats) = summary.comments {
        pills.push(pill("Comments", stats.comments_removed()));
        pills.push(pill("Kept", stats.block_comments_kept));
        pills.push(pill("Blank runs", stats.blank_runs_collapsed));
    }
    if let Some(raked) = summary.nodes_raked {
        pills.push(pill("Nodes", raked));
    }
    writeln!(writer, "{}", pills.join("  "))?;

    if summary.errors > 0 {
        writeln!(
            writer,
            "{}",
            format!("Errors: {}", summary.errors).red().bold()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn count_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count == 0 {
        cell.add_attribute(Attribute::Dim)
    } else {
        cell
    }
}

/// Print the per-file table for the files that changed.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_table(writer: &mut impl Write, summary: &RakeSummary) -> std::io::Result<()> {
    let changed: Vec<&FileReport> = summary
        .files
        .iter()
        .filter(|f| f.changed && f.error.is_none())
        .collect();
    if changed.is_empty() {
        writeln!(writer, "{}", "Nothing to rake.".green())?;
        return Ok(());
    }

    let mut headers = vec!["File", "Before", "After"];
    if summary.comments.is_some() {
        headers.extend(["Comments", "Kept", "Blank runs"]);
    }
    if summary.nodes_raked.is_some() {
        headers.push("Nodes");
    }
    let mut table = create_table(headers);

    for report in changed {
        let mut row = vec![
            Cell::new(&report.file).add_attribute(Attribute::Bold),
            count_cell(report.bytes_before),
            count_cell(report.bytes_after),
        ];
        if let Some(stats) = report.comments {
            row.push(count_cell(stats.comments_removed()));
            row.push(count_cell(stats.block_comments_kept));
            row.push(count_cell(stats.blank_runs_collapsed));
        }
        if let Some(raked) = report.nodes_raked {
            row.push(count_cell(raked));
        }
        table.add_row(row);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the files that could not be raked.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_errors(writer: &mut impl Write, summary: &RakeSummary) -> std::io::Result<()> {
    let failed: Vec<&FileReport> = summary.files.iter().filter(|f| f.error.is_some()).collect();
    if failed.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\n{}", "Errors".bold().underline().red())?;

    let mut table = create_table(vec!["File", "Error"]);
    for report in failed {
        table.add_row(vec![
            Cell::new(&report.file).add_attribute(Attribute::Bold),
            Cell::new(report.error.as_deref().unwrap_or_default()).fg(Color::Red),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the full report.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_report(writer: &mut impl Write, summary: &RakeSummary) -> std::io::Result<()> {
    print_header(writer, summary.applied)?;
    print_summary_pills(writer, summary)?;
    print_file_table(writer, summary)?;
    print_errors(writer, summary)?;
    if !summary.applied && summary.changed_files > 0 {
        writeln!(
            writer,
            "\n{}",
            "[DRY-RUN] No files were modified. Use --apply to write changes.".yellow()
        )?;
    }
    Ok(())
}

/// Print the summary line only.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn print_report_quiet(writer: &mut impl Write, summary: &RakeSummary) -> std::io::Result<()> {
    print_summary_pills(writer, summary)?;
    print_errors(writer, summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScanStats;

    fn summary() -> RakeSummary {
        RakeSummary::new(
            vec![
                FileReport {
                    file: "src/app.js".to_owned(),
                    changed: true,
                    bytes_before: 120,
                    bytes_after: 80,
                    comments: Some(ScanStats {
                        line_comments_removed: 3,
                        block_comments_removed: 1,
                        block_comments_kept: 1,
                        blank_runs_collapsed: 2,
                    }),
                    ..FileReport::default()
                },
                FileReport::failed("src/broken.js".to_owned(), "stream did not contain valid UTF-8"),
            ],
            false,
        )
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_print_report() {
        let summary = summary();
        let out = render(|w| print_report(w, &summary));
        assert!(out.contains("Raking Preview"));
        assert!(out.contains("Changed: 1"));
        assert!(out.contains("Comments: 4"));
        assert!(out.contains("src/app.js"));
        assert!(out.contains("src/broken.js"));
        assert!(out.contains("[DRY-RUN]"));
    }

    #[test]
    fn test_print_report_quiet_has_no_table() {
        let mut summary = summary();
        summary.files.pop();
        summary.errors = 0;
        let out = render(|w| print_report_quiet(w, &summary));
        assert!(out.contains("Files: 2"));
        assert!(!out.contains("src/app.js"));
    }

    #[test]
    fn test_print_file_table_nothing_changed() {
        let summary = RakeSummary::new(vec![FileReport::default()], true);
        let out = render(|w| print_file_table(w, &summary));
        assert!(out.contains("Nothing to rake."));
    }

    #[test]
    fn test_print_exclusion_list() {
        let out = render(|w| print_exclusion_list(w, &[]));
        assert!(out.contains("node_modules"));
        let out = render(|w| print_exclusion_list(w, &["vendor".to_owned()]));
        assert!(out.contains("Excluding: vendor"));
    }
}
