use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, DEFAULT_EXTENSIONS, PACKAGE_JSON_FILENAME};
use crate::policy::{CommentPolicy, KeepConsole, StripPolicy};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for raker.
    pub raker: RakerConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Configuration options for raker.
pub struct RakerConfig {
    /// Keep license comments (`/*!`, or doc comments with `@license`).
    pub keep_licenses: Option<bool>,
    /// Keep JSDoc/TSDoc comments (`/**`).
    pub keep_docs: Option<bool>,
    /// Keep `__PURE__` / `__NO_SIDE_EFFECTS__` annotations.
    pub keep_annotations: Option<bool>,
    /// Keep all console calls, none, or only the listed methods.
    pub keep_console: Option<KeepConsole>,
    /// Keep `debugger` statements.
    pub keep_debugger: Option<bool>,
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
    /// List of folders to include.
    pub include_folders: Option<Vec<String>>,
    /// File extensions to rake (without the dot).
    pub extensions: Option<Vec<String>>,
}

impl RakerConfig {
    /// Comment policy from this configuration.
    #[must_use]
    pub fn comment_policy(&self) -> CommentPolicy {
        CommentPolicy {
            keep_licenses: self.keep_licenses.unwrap_or(false),
            keep_docs: self.keep_docs.unwrap_or(false),
            keep_annotations: self.keep_annotations.unwrap_or(false),
        }
    }

    /// Strip policy from this configuration.
    #[must_use]
    pub fn strip_policy(&self) -> StripPolicy {
        StripPolicy {
            keep_console: self.keep_console.clone().unwrap_or_default(),
            keep_debugger: self.keep_debugger.unwrap_or(false),
        }
    }

    /// Extensions to rake, falling back to the defaults.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS
                .iter()
                .map(|&ext| ext.to_owned())
                .collect()
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
struct PackageJson {
    raker: Option<RakerConfig>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            // 1. Try CONFIG_FILENAME
            let raker_toml = current.join(CONFIG_FILENAME);
            if raker_toml.exists() {
                if let Ok(content) = fs::read_to_string(&raker_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(raker_toml);
                        return config;
                    }
                }
            }

            // 2. Try a "raker" section in PACKAGE_JSON_FILENAME
            let package_json = current.join(PACKAGE_JSON_FILENAME);
            if package_json.exists() {
                if let Ok(content) = fs::read_to_string(&package_json) {
                    if let Ok(PackageJson { raker: Some(raker) }) =
                        serde_json::from_str::<PackageJson>(&content)
                    {
                        return Config {
                            raker,
                            config_file_path: Some(package_json),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
