use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the project configuration file.
pub const CONFIG_FILENAME: &str = ".raker.toml";

/// Name of the npm manifest, which may carry a `"raker"` section.
pub const PACKAGE_JSON_FILENAME: &str = "package.json";

/// Replacement for a node removed from an expression position.
pub const VOID_PLACEHOLDER: &str = "(void 0)";

/// Replacement for a node removed from an arrow function body.
pub const EMPTY_BLOCK_PLACEHOLDER: &str = "{}";

/// File extensions raked by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

/// Regex for license comments: `/*!` followed by a space or line terminator.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_license_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^/\*![ \r\n\x{2028}\x{2029}]").expect("Invalid license comment regex pattern")
    })
}

/// Regex for doc comments: `/**` followed by a space or line terminator.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_doc_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^/\*\*[ \r\n\x{2028}\x{2029}]").expect("Invalid doc comment regex pattern")
    })
}

/// Regex for a `@license` tag inside a doc comment.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_doc_license_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\s@license\b").expect("Invalid license tag regex pattern"))
}

/// Regex for bundler annotations (`__PURE__`, `__NO_SIDE_EFFECTS__`).
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"[@#]__(?:PURE|NO_SIDE_EFFECTS)__").expect("Invalid annotation regex pattern")
    })
}

/// Methods of the global `console` object.
pub fn get_console_methods() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        [
            "assert",
            "clear",
            "count",
            "countReset",
            "debug",
            "dir",
            "dirxml",
            "error",
            "group",
            "groupCollapsed",
            "groupEnd",
            "info",
            "log",
            "profile",
            "profileEnd",
            "table",
            "time",
            "timeEnd",
            "timeLog",
            "timeStamp",
            "trace",
            "warn",
        ]
        .into_iter()
        .collect()
    })
}

/// Set of folders to exclude by default.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("node_modules");
        s.insert(".git");
        s.insert(".hg");
        s.insert(".svn");
        s.insert("bower_components");
        s.insert("jspm_packages");
        s.insert(".next");
        s.insert(".nuxt");
        s.insert(".cache");
        s.insert("coverage");
        s.insert(".nyc_output");
        s
    })
}

pub use get_annotation_re as ANNOTATION_RE;
pub use get_console_methods as CONSOLE_METHODS;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_doc_license_tag_re as DOC_LICENSE_TAG_RE;
pub use get_doc_start_re as DOC_START_RE;
pub use get_license_start_re as LICENSE_START_RE;
