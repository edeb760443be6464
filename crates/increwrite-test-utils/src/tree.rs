//! Temporary source trees.
//!
//! [`TestTree`] owns a temp directory and writes files into it by
//! `/`-separated relative path, creating parent directories as needed.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A C source tree rooted in a temp directory.
///
/// The directory is deleted when this value is dropped, guaranteeing
/// cleanup even on panic.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write `content` to `rel`, returning `self` for chaining.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.write(rel, content);
        self
    }

    /// Write (or overwrite) `content` at `rel`.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path_of(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(&path, content).expect("failed to write test file");
    }

    /// Read the file at `rel` as UTF-8.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path_of(rel)).expect("failed to read test file")
    }

    /// Read the raw bytes of the file at `rel`.
    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        std::fs::read(self.path_of(rel)).expect("failed to read test file")
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path_of(&self, rel: &str) -> PathBuf {
        rel.split('/')
            .fold(self.dir.path().to_path_buf(), |acc, part| acc.join(part))
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
