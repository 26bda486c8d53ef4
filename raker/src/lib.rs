//! Core library for the raker tool.
//!
//! Raking removes comments, collapses runs of blank lines, and deletes or
//! neutralizes nodes located by an external walker, all as edits on a
//! [`buffer::SourceBuffer`] so the result comes with a position map.

#![allow(clippy::similar_names, clippy::items_after_statements)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Half-open byte ranges.
pub mod span;

/// Edit buffer over a source text and the position map it renders.
pub mod buffer;

/// The raking engine: comment scanner, node policy and the `Raker` driver.
pub mod engine;

/// Policies deciding which block comments and located nodes go.
pub mod policy;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module for loading configuration.
pub mod config;

/// Module containing utility functions.
pub mod utils;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point shared by the binaries.
pub mod entry_point;

/// Module for rich CLI output formatting with colored text and progress bars.
pub mod output;
