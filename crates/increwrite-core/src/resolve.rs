//! Include resolution by basename.
//!
//! The directory part of an include token is untrusted: the tool exists to
//! repair stale prefixes. A token resolves to whichever file in the tree
//! carries the same basename, expressed relative to the tree root with `/`
//! separators.
//!
//! When several files share a basename the last one met by the top-down
//! walk wins, so a header in a deeper directory shadows one above it. The
//! walk order is fixed, so within a run (and across runs over an unchanged
//! tree) every token with that basename resolves to the same file.

use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::enumerate::walk_files;

/// Mapping from include token to its tree-relative path.
///
/// Iteration is ordered by token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeMap {
    entries: BTreeMap<String, String>,
}

impl IncludeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` → `resolved`, replacing any previous entry.
    pub fn insert(&mut self, token: impl Into<String>, resolved: impl Into<String>) {
        self.entries.insert(token.into(), resolved.into());
    }

    /// The resolved path for `token`, if any.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Iterate over `(token, resolved path)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Final path component of an include token.
///
/// Both `/` and `\` count as separators; a token ending in a separator has
/// an empty basename.
pub fn token_basename(token: &str) -> &str {
    token.rsplit(['/', '\\']).next().unwrap_or(token)
}

/// `path` relative to `root`, joined with `/`.
///
/// Returns `None` when `path` is not under `root`.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Last file seen for each basename under a root.
struct BasenameIndex {
    by_name: HashMap<String, PathBuf>,
}

impl BasenameIndex {
    fn build(root: &Path) -> Self {
        let mut by_name = HashMap::new();
        for entry in walk_files(root) {
            let name = entry.file_name().to_string_lossy().into_owned();
            by_name.insert(name, entry.into_path());
        }
        Self { by_name }
    }

    fn lookup(&self, basename: &str) -> Option<&Path> {
        self.by_name.get(basename).map(PathBuf::as_path)
    }
}

/// Resolve every token against the files under `root`.
///
/// Tokens whose basename matches no file are left out of the map.
pub fn resolve_includes<I, S>(root: &Path, tokens: I) -> IncludeMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let index = BasenameIndex::build(root);
    let mut map = IncludeMap::new();
    let mut unresolved = 0usize;

    for token in tokens {
        let token = token.as_ref();
        let basename = token_basename(token);
        let resolved = if basename.is_empty() {
            None
        } else {
            index
                .lookup(basename)
                .and_then(|path| relative_slash_path(root, path))
        };

        match resolved {
            Some(rel) => {
                debug!(token, resolved = %rel, "Resolved include");
                map.insert(token, rel);
            }
            None => {
                debug!(token, "No file in tree for include");
                unresolved += 1;
            }
        }
    }

    info!(resolved = map.len(), unresolved, "Resolved include tokens");
    map
}
