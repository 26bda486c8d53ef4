use crate::cli::{Cli, Commands};
use crate::commands::{run_comments, run_strip, CommentsOptions, StripOptions};
use crate::config::Config;
use crate::policy::KeepConsole;
use crate::utils::merge_folders;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Runs raker with the given arguments.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run raker with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["raker".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let config = Config::load_from_path(&cli_var.command.config_anchor());
    let rake = cli_var.command.rake_args();
    let exclude_folders = merge_folders(
        config.raker.exclude_folders.as_deref(),
        &rake.exclude_folders,
    );
    let include_folders = merge_folders(
        config.raker.include_folders.as_deref(),
        &rake.include_folders,
    );

    let output = &cli_var.output;
    if output.verbose && !output.json {
        eprintln!("[VERBOSE] raker v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
            None => eprintln!("[VERBOSE] Config: defaults"),
        }
        eprintln!("[VERBOSE] Executing subcommand: {:?}", cli_var.command);
        eprintln!("[VERBOSE] Global Excludes: {exclude_folders:?}");
        eprintln!();
    }

    match &cli_var.command {
        Commands::Comments {
            paths,
            policy,
            rake,
        } => {
            let paths = if paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                paths.clone()
            };
            if let Some(missing) = paths.iter().find(|p| !p.exists()) {
                eprintln!(
                    "{} The file or directory '{}' does not exist.",
                    "Error:".red(),
                    missing.display()
                );
                return Ok(1);
            }

            let mut comment_policy = config.raker.comment_policy();
            comment_policy.keep_licenses |= policy.keep_licenses;
            comment_policy.keep_docs |= policy.keep_docs;
            comment_policy.keep_annotations |= policy.keep_annotations;

            let options = CommentsOptions {
                policy: comment_policy,
                apply: rake.apply,
                map: rake.map,
                stdout: rake.stdout,
                json: output.json,
                quiet: output.quiet,
                verbose: output.verbose,
                exclude_folders,
                include_folders,
                extensions: config.raker.extensions(),
            };
            run_comments(&paths, &options, writer)
        }
        Commands::Strip {
            file,
            nodes,
            keep_console,
            keep_debugger,
            rake,
        } => {
            for path in [file, nodes] {
                if !path.is_file() {
                    eprintln!(
                        "{} The file '{}' does not exist.",
                        "Error:".red(),
                        path.display()
                    );
                    return Ok(1);
                }
            }

            let mut strip_policy = config.raker.strip_policy();
            if let Some(methods) = keep_console {
                strip_policy.keep_console = if methods.is_empty() {
                    KeepConsole::All(true)
                } else {
                    KeepConsole::Methods(methods.clone())
                };
            }
            strip_policy.keep_debugger |= *keep_debugger;

            let options = StripOptions {
                policy: strip_policy,
                apply: rake.apply,
                map: rake.map,
                stdout: rake.stdout,
                json: output.json,
                quiet: output.quiet,
                verbose: output.verbose,
            };
            run_strip(file, nodes, &options, writer)
        }
    }
}
