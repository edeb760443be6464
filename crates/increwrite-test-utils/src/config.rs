//! Configuration builders for tests.

use std::path::Path;

use increwrite_config::ReplacerConfig;

/// Fluent builder for [`ReplacerConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new(tree.root())
///     .only(&["src"])
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: ReplacerConfig,
}

impl TestConfigBuilder {
    pub fn new(root: &Path) -> Self {
        Self {
            config: ReplacerConfig::new(root),
        }
    }

    pub fn only(mut self, subfolders: &[&str]) -> Self {
        self.config.only = Some(subfolders.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.config.extensions = extensions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ReplacerConfig {
        self.config
    }
}
