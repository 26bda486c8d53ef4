//! `strip` subcommand: rake nodes located by an external walker.

use super::utils::{read_source, write_rendered};
use super::{FileReport, RakeSummary};
use crate::engine::{LocatedNode, RakeAction, Raker};
use crate::output;
use crate::policy::StripPolicy;
use crate::utils::{normalize_display_path, LineIndex};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options for the strip subcommand
#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    /// Which located nodes get raked
    pub policy: StripPolicy,
    /// Write the raked text back to the file
    pub apply: bool,
    /// Write a position map next to the written file
    pub map: bool,
    /// Print the raked text instead of a report
    pub stdout: bool,
    /// Output JSON
    pub json: bool,
    /// Summary only
    pub quiet: bool,
    /// Verbose output
    pub verbose: bool,
}

/// Read a JSON array of located nodes.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a node array.
pub fn load_nodes(path: &Path) -> Result<Vec<LocatedNode>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read nodes from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid node list in {}", path.display()))
}

fn describe(action: RakeAction) -> String {
    match action {
        RakeAction::Remove => "remove".to_owned(),
        RakeAction::Overwrite(placeholder) => format!("overwrite with {placeholder}"),
    }
}

/// Run the strip subcommand over `file` with the nodes listed in `nodes_path`.
///
/// # Errors
///
/// Returns an error if the file or node list cannot be read, or writing the
/// output fails.
pub fn run_strip<W: Write>(
    file: &Path,
    nodes_path: &Path,
    options: &StripOptions,
    writer: &mut W,
) -> Result<i32> {
    let code = read_source(file)?;
    let nodes = load_nodes(nodes_path)?;
    let display = normalize_display_path(file);

    if options.verbose && !options.json {
        let lines = LineIndex::new(&code);
        eprintln!("[VERBOSE] {} nodes listed for {display}", nodes.len());
        for node in nodes.iter().filter(|n| options.policy.should_rake(&n.kind)) {
            eprintln!(
                "[VERBOSE]   line {}: {:?} in {} -> {}",
                lines.line_index(node.start),
                node.kind,
                node.parent,
                describe(RakeAction::for_parent(node.parent))
            );
        }
    }

    let mut raker = Raker::new(code.as_str());
    let raked = raker.rake_nodes(options.policy.select(&nodes));
    let bytes_before = code.len();

    let report = match raker.finish() {
        Err(e) => FileReport::failed(display, e),
        Ok(rendered) => {
            if options.stdout {
                write!(writer, "{}", rendered.map_or(code, |r| r.code))?;
                return Ok(0);
            }

            let mut report = FileReport {
                file: display,
                changed: rendered.is_some(),
                bytes_before,
                bytes_after: rendered.as_ref().map_or(bytes_before, |r| r.code.len()),
                nodes_raked: Some(raked),
                ..FileReport::default()
            };
            if let (true, Some(rendered)) = (options.apply, rendered.as_ref()) {
                write_rendered(file, rendered, options.map)?;
                report.written = true;
            }
            report
        }
    };

    let summary = RakeSummary::new(vec![report], options.apply);

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else if options.quiet {
        output::print_report_quiet(writer, &summary)?;
    } else {
        output::print_report(writer, &summary)?;
    }

    Ok(summary.exit_code())
}
