#![deny(unsafe_code)]

//! Run configuration for increwrite.
//!
//! A [`ReplacerConfig`] describes one pass over a C source tree: the root
//! folder, which file extensions take part, and an optional restriction of
//! the rewrite step to a set of subfolders. The CLI builds one per
//! invocation and validates it before any file is touched.

use std::path::{Path, PathBuf};

/// Errors that can occur while building or validating a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{} is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Extensions scanned when none are given explicitly.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".c", ".h"];

/// Configuration for a single scan/resolve/rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacerConfig {
    /// Root of the source tree. Resolved paths are relative to it.
    pub root: PathBuf,

    /// File name suffixes that select source files (e.g. `".c"`).
    pub extensions: Vec<String>,

    /// Subfolders (relative to `root`) whose files get rewritten.
    /// `None` rewrites every matching file in the tree.
    pub only: Option<Vec<String>>,
}

impl ReplacerConfig {
    /// Create a configuration for `root` with the default extensions and no
    /// subfolder restriction.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            only: None,
        }
    }

    /// Restrict the rewrite step to the given subfolders.
    pub fn with_only(mut self, only: Option<Vec<String>>) -> Self {
        self.only = only;
        self
    }

    /// Replace the extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// The subfolder restriction, if any, as a slice.
    pub fn only(&self) -> Option<&[String]> {
        self.only.as_deref()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.is_dir() {
            return Err(ConfigError::NotADirectory(self.root.clone()));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "at least one file extension is required".to_string(),
            ));
        }
        if self.extensions.iter().any(|e| e.is_empty()) {
            return Err(ConfigError::Validation(
                "file extensions must be non-empty".to_string(),
            ));
        }
        if let Some(only) = &self.only
            && only.is_empty()
        {
            return Err(ConfigError::Validation(
                "-only requires at least one subfolder".to_string(),
            ));
        }
        Ok(())
    }

    /// Build and validate a configuration in one step.
    pub fn load(root: &Path, only: Option<Vec<String>>) -> Result<Self, ConfigError> {
        let config = Self::new(root).with_only(only);
        config.validate()?;
        tracing::debug!(
            root = %config.root.display(),
            only = ?config.only,
            "Configuration validated"
        );
        Ok(config)
    }
}

/// Parse the interactive "comma separated subfolders" answer.
///
/// Entries are trimmed and empty entries dropped; a blank answer means
/// "no restriction".
pub fn parse_subfolder_list(input: &str) -> Option<Vec<String>> {
    let folders: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if folders.is_empty() {
        None
    } else {
        Some(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ReplacerConfig::new("src");
        assert_eq!(config.extensions, vec![".c", ".h"]);
        assert_eq!(config.only(), None);
    }

    #[test]
    fn test_validate_accepts_directory() {
        let dir = TempDir::new().unwrap();
        let config = ReplacerConfig::new(dir.path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = ReplacerConfig::new(&missing).validate().unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(ref p) if p == &missing));
        assert!(err.to_string().ends_with("is not a valid directory"));
    }

    #[test]
    fn test_validate_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.c");
        std::fs::write(&file, "int main(void) { return 0; }\n").unwrap();
        let result = ReplacerConfig::new(&file).validate();
        assert!(matches!(result, Err(ConfigError::NotADirectory(_))));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let dir = TempDir::new().unwrap();
        let empty: [&str; 0] = [];
        let config = ReplacerConfig::new(dir.path()).with_extensions(empty);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        let config = ReplacerConfig::new(dir.path()).with_extensions([".c", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_only() {
        let dir = TempDir::new().unwrap();
        let config = ReplacerConfig::new(dir.path()).with_only(Some(Vec::new()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test_log::test]
    fn test_load_keeps_only() {
        let dir = TempDir::new().unwrap();
        let config =
            ReplacerConfig::load(dir.path(), Some(vec!["src".to_string()])).unwrap();
        assert_eq!(config.only(), Some(&["src".to_string()][..]));
    }

    #[test]
    fn test_parse_subfolder_list() {
        assert_eq!(parse_subfolder_list(""), None);
        assert_eq!(parse_subfolder_list("  "), None);
        assert_eq!(parse_subfolder_list(" , ,"), None);
        assert_eq!(
            parse_subfolder_list("src, include ,lib"),
            Some(vec![
                "src".to_string(),
                "include".to_string(),
                "lib".to_string()
            ])
        );
    }
}
