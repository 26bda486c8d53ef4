//! Path handling utilities.
//!
//! Display normalization, exclusion matching and the gitignore-aware source
//! walk.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use raker::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\dist\\app.js")), "dist/app.js");
/// assert_eq!(normalize_display_path(Path::new("./src/main.ts")), "src/main.ts");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| match exclude.strip_prefix("*.") {
        Some(ext) => name
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.')),
        None => name == exclude,
    })
}

/// Whether `path` has one of `extensions` (compared without the dot).
#[must_use]
pub fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Collects source files from a directory with gitignore support.
///
/// Uses the `ignore` crate to respect .gitignore, .git/info/exclude, and global gitignore
/// IN ADDITION to the default exclusions (`node_modules`, VCS folders, caches).
///
/// # Arguments
/// * `root` - Root directory to search
/// * `exclude` - Additional user-specified exclusion patterns
/// * `include` - Folders to force-include (overrides excludes)
/// * `extensions` - File extensions to keep, without the dot
/// * `verbose` - Whether to print walk errors to stderr
///
/// # Returns
/// Tuple of (sorted source files found, directory count)
#[must_use]
pub fn collect_source_files(
    root: &Path,
    exclude: &[String],
    include: &[String],
    extensions: &[String],
    verbose: bool,
) -> (Vec<PathBuf>, usize) {
    use ignore::WalkBuilder;

    let mut all_excludes: Vec<String> = exclude
        .iter()
        .cloned()
        .chain(DEFAULT_EXCLUDE_FOLDERS().iter().map(|&s| s.to_owned()))
        .collect();

    // Force-included folders win over every exclusion
    all_excludes.retain(|ex| !include.iter().any(|inc| ex == inc));

    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }

            // Files are filtered by extension after the walk
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            match entry.file_name().to_str() {
                Some(name) => !is_excluded(name, &all_excludes),
                None => true,
            }
        })
        .build();

    let mut files = Vec::new();
    let mut dir_count = 0;

    for result in walker {
        match result {
            Ok(entry) => {
                let path = entry.path();

                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    if path != root {
                        dir_count += 1;
                    }
                    continue;
                }

                if has_source_extension(path, extensions) {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files.sort();
    (files, dir_count)
}
