//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILENAME, Config};
use crate::classify::ends_with_ignore_case;
use crate::error::{Result, StubError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StubError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run rooted at `root`.
    ///
    /// An explicit path wins; otherwise `<root>/.xstub.yaml` is used when it
    /// exists; otherwise the defaults apply.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = root.join(CONFIG_FILENAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using tree config");
            return Self::load(candidate);
        }

        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| StubError::Config(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// The stub filename must itself classify as a test file; otherwise a
    /// second stubbing run would find the directory still eligible.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("source_suffix", &self.source_suffix),
            ("test_suffix", &self.test_suffix),
            ("stub_filename", &self.stub_filename),
            ("declaration_keyword", &self.declaration_keyword),
            ("comment_marker", &self.comment_marker),
            ("hidden_prefix", &self.hidden_prefix),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(StubError::Config(format!(
                    "config validation failed: {} must be non-empty",
                    name
                )));
            }
        }

        if self.declaration_keyword.chars().any(char::is_whitespace) {
            return Err(StubError::Config(format!(
                "config validation failed: declaration_keyword must be a single word (found '{}')",
                self.declaration_keyword
            )));
        }

        if self.stub_filename.contains(['/', '\\']) {
            return Err(StubError::Config(format!(
                "config validation failed: stub_filename must be a plain file name (found '{}')",
                self.stub_filename
            )));
        }

        if !ends_with_ignore_case(&self.stub_filename, &self.test_suffix) {
            return Err(StubError::Config(format!(
                "config validation failed: stub_filename '{}' must end with test_suffix '{}'",
                self.stub_filename, self.test_suffix
            )));
        }

        if !ends_with_ignore_case(&self.test_suffix, &self.source_suffix) {
            return Err(StubError::Config(format!(
                "config validation failed: test_suffix '{}' must end with source_suffix '{}'",
                self.test_suffix, self.source_suffix
            )));
        }

        self.exclude_set()?;
        Ok(())
    }

    /// Compile the `exclude` patterns into a glob set.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                StubError::Config(format!(
                    "invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| StubError::Config(format!("failed to build exclude globs: {}", e)))
    }
}
