//! Source file discovery.
//!
//! Walks a tree (or a set of subfolders under it) and collects every file
//! whose name ends with one of the configured extensions. Each directory's
//! files are visited before its subdirectories, both in file-name order, so
//! repeated runs over the same tree see the same sequence.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Files before directories, then by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Whether `entry` is a regular file or a symlink that points at one.
///
/// Symlinked directories are not descended into.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Iterate over every file below `dir`, top-down.
///
/// A missing `dir` yields nothing. Entries that cannot be read are skipped
/// with a warning.
pub(crate) fn walk_files(dir: &Path) -> impl Iterator<Item = DirEntry> {
    let walker = dir.is_dir().then(|| {
        WalkDir::new(dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by(files_first)
    });

    walker
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(is_file_like)
}

/// Whether `path`'s file name ends with one of `extensions`.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Collect the files under `root` matching `extensions`.
///
/// With `subfolders`, only `root/<subfolder>` trees are walked; a subfolder
/// that does not exist contributes no files. A file reachable through more
/// than one listed subfolder is returned once.
pub fn find_files(
    root: &Path,
    extensions: &[String],
    subfolders: Option<&[String]>,
) -> Vec<PathBuf> {
    let dirs: Vec<PathBuf> = match subfolders {
        Some(subfolders) => subfolders.iter().map(|s| root.join(s)).collect(),
        None => vec![root.to_path_buf()],
    };

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for dir in &dirs {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Subfolder not found, nothing to scan");
            continue;
        }
        for entry in walk_files(dir) {
            let path = entry.into_path();
            if has_extension(&path, extensions) && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec![".c".to_string(), ".h".to_string()]
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        let mut out: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_has_extension_is_suffix_match() {
        let exts = exts();
        assert!(has_extension(Path::new("src/main.c"), &exts));
        assert!(has_extension(Path::new("inc/util.h"), &exts));
        assert!(!has_extension(Path::new("src/main.cpp"), &exts));
        assert!(!has_extension(Path::new("README"), &exts));
    }

    #[test]
    fn test_find_files_whole_tree() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.c");
        touch(dir.path(), "a/x.h");
        touch(dir.path(), "a/deep/y.c");
        touch(dir.path(), "docs/notes.txt");

        let files = find_files(dir.path(), &exts(), None);
        assert_eq!(
            relative(dir.path(), &files),
            vec!["a/deep/y.c", "a/x.h", "main.c"]
        );
    }

    #[test]
    fn test_find_files_restricted_to_subfolders() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/x.h");
        touch(dir.path(), "b/main.c");
        touch(dir.path(), "c/other.c");

        let only = vec!["b".to_string(), "c".to_string()];
        let files = find_files(dir.path(), &exts(), Some(only.as_slice()));
        assert_eq!(relative(dir.path(), &files), vec!["b/main.c", "c/other.c"]);
    }

    #[test]
    fn test_find_files_missing_subfolder_yields_nothing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/x.h");

        let only = vec!["missing".to_string()];
        assert!(find_files(dir.path(), &exts(), Some(only.as_slice())).is_empty());
    }

    #[test]
    fn test_find_files_overlapping_subfolders_deduplicated() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/b/x.h");

        let only = vec!["a".to_string(), "a/b".to_string()];
        let files = find_files(dir.path(), &exts(), Some(only.as_slice()));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_walk_files_lists_files_before_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/aaa/dup.h");
        touch(dir.path(), "a/dup.h");
        touch(dir.path(), "a/zzz.c");

        let order: Vec<PathBuf> = walk_files(dir.path()).map(DirEntry::into_path).collect();
        assert_eq!(
            relative(dir.path(), &order[..2]),
            vec!["a/dup.h", "a/zzz.c"]
        );
        assert_eq!(relative(dir.path(), &order[2..]), vec!["a/aaa/dup.h"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_files_follows_file_symlinks_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real/x.h");
        std::fs::create_dir_all(dir.path().join("inc")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real/x.h"), dir.path().join("inc/link.h"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();

        let files = find_files(dir.path(), &exts(), None);
        assert_eq!(relative(dir.path(), &files), vec!["inc/link.h", "real/x.h"]);
    }

    #[test]
    fn test_walk_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(walk_files(&dir.path().join("gone")).count(), 0);
    }
}
