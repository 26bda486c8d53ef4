//! Shared utilities for command implementations.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::buffer::Rendered;

/// Where the position map for `file` is written: `<file>.map.json`.
#[must_use]
pub fn map_path(file: &Path) -> PathBuf {
    let mut name = OsString::from(file.as_os_str());
    name.push(".map.json");
    PathBuf::from(name)
}

/// Write the raked text over `file`, and its position map when `with_map` is set.
pub fn write_rendered(file: &Path, rendered: &Rendered, with_map: bool) -> Result<()> {
    fs::write(file, &rendered.code)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    if with_map {
        let target = map_path(file);
        let json = serde_json::to_string_pretty(&rendered.map)?;
        fs::write(&target, json)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }
    Ok(())
}

/// Read a source file as UTF-8.
pub fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}
