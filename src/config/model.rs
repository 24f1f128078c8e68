//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Name of the per-tree config file looked up in the root directory.
pub const CONFIG_FILENAME: &str = ".xstub.yaml";

/// Language profile for a stubbing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // File classification
    // =========================================================================
    /// Suffix identifying real source files (matched case-insensitively).
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,

    /// Suffix identifying test files (matched case-insensitively).
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,

    /// Reserved filename of the injected stub (matched exactly).
    #[serde(default = "default_stub_filename")]
    pub stub_filename: String,

    // =========================================================================
    // Declaration scanning
    // =========================================================================
    /// Keyword that opens a package/module declaration line.
    #[serde(default = "default_declaration_keyword")]
    pub declaration_keyword: String,

    /// Line-comment marker; everything after it on a line is ignored.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    // =========================================================================
    // Traversal
    // =========================================================================
    /// Directory names starting with this prefix are never descended into.
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,

    /// Glob patterns (relative to the root, `/`-separated) of directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_suffix: default_source_suffix(),
            test_suffix: default_test_suffix(),
            stub_filename: default_stub_filename(),
            declaration_keyword: default_declaration_keyword(),
            comment_marker: default_comment_marker(),
            hidden_prefix: default_hidden_prefix(),
            exclude: Vec::new(),
        }
    }
}

fn default_source_suffix() -> String {
    ".go".to_string()
}

fn default_test_suffix() -> String {
    "_test.go".to_string()
}

fn default_stub_filename() -> String {
    "x_test.go".to_string()
}

fn default_declaration_keyword() -> String {
    "package".to_string()
}

fn default_comment_marker() -> String {
    "//".to_string()
}

fn default_hidden_prefix() -> String {
    ".".to_string()
}
