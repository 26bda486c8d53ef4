use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.raker.toml):
  Create this file in your project root to set defaults.
  A \"raker\" object in package.json takes the same keys.

  [raker]
  # Comment policy
  keep_licenses = true        # Keep /*! ... */ and @license doc comments
  keep_docs = false           # Keep /** ... */ doc comments
  keep_annotations = true     # Keep __PURE__ / __NO_SIDE_EFFECTS__ hints

  # Strip policy
  keep_console = [\"error\"]    # true, false, or the console methods to keep
  keep_debugger = false       # Keep debugger statements

  # Path filters
  exclude_folders = [\"vendor\"]
  include_folders = [\"node_modules\"]  # Force-include these
  extensions = [\"js\", \"mjs\"]
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output for debugging (shows files being raked).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: show only the summary line (no per-file table).
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Options shared by every raking subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct RakeArgs {
    /// Write the raked text back to the files.
    /// Without this flag, only a preview of what would change is shown.
    #[arg(short = 'a', long)]
    pub apply: bool,

    /// Write a `<file>.map.json` position map next to every changed file (use with --apply).
    #[arg(long)]
    pub map: bool,

    /// Print the raked text to stdout instead of a report (single file only).
    #[arg(long, conflicts_with = "apply")]
    pub stdout: bool,

    /// Folders to exclude from the walk.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Folders to force-include in the walk (overrides default exclusions).
    #[arg(long, alias = "include-folder")]
    pub include_folders: Vec<String>,
}

/// Comment policy flags.
#[derive(Args, Debug, Default, Clone)]
pub struct CommentArgs {
    /// Keep license comments (`/*!`, or doc comments with an `@license` tag).
    #[arg(long)]
    pub keep_licenses: bool,

    /// Keep JSDoc/TSDoc comments (`/**`).
    #[arg(long)]
    pub keep_docs: bool,

    /// Keep `__PURE__` / `__NO_SIDE_EFFECTS__` annotation comments.
    #[arg(long)]
    pub keep_annotations: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "raker - Strip comments, blank lines and located nodes from JavaScript/TypeScript",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Remove comments and collapse blank-line runs
    Comments {
        /// Files or directories to rake.
        /// When no paths are provided, defaults to the current directory.
        paths: Vec<PathBuf>,

        /// Which block comments to keep.
        #[command(flatten)]
        policy: CommentArgs,

        /// Shared raking options.
        #[command(flatten)]
        rake: RakeArgs,
    },
    /// Remove or neutralize nodes located by an external walker
    Strip {
        /// The source file the nodes were located in.
        file: PathBuf,

        /// JSON array of located nodes: `{"start", "end", "parent", "kind"}`.
        #[arg(long)]
        nodes: PathBuf,

        /// Keep console calls: all of them, or only the listed methods.
        #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "METHOD")]
        keep_console: Option<Vec<String>>,

        /// Keep `debugger` statements.
        #[arg(long)]
        keep_debugger: bool,

        /// Shared raking options.
        #[command(flatten)]
        rake: RakeArgs,
    },
}

impl Commands {
    /// Shared raking options of the subcommand.
    #[must_use]
    pub fn rake_args(&self) -> &RakeArgs {
        match self {
            Self::Comments { rake, .. } | Self::Strip { rake, .. } => rake,
        }
    }

    /// The path configuration is searched from.
    #[must_use]
    pub fn config_anchor(&self) -> PathBuf {
        match self {
            Self::Comments { paths, .. } => {
                paths.first().cloned().unwrap_or_else(|| PathBuf::from("."))
            }
            Self::Strip { file, .. } => file.clone(),
        }
    }
}
