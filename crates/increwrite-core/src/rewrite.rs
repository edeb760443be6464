//! In-place include rewriting.
//!
//! Every directive that names a mapped token, quoted or angle-bracketed, is
//! replaced with `#include "<resolved path>"`. Patterns are compiled once
//! per [`IncludeMap`] and reused for every target file.

use std::borrow::Cow;
use std::path::Path;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::ReplaceError;
use crate::resolve::IncludeMap;

/// One token's directive pattern and its normalised replacement.
#[derive(Debug)]
struct Rule {
    token: String,
    pattern: Regex,
    replacement: String,
}

/// Applies an [`IncludeMap`] to source text and files.
#[derive(Debug)]
pub struct Rewriter {
    rules: Vec<Rule>,
}

impl Rewriter {
    /// Compile a rewrite rule for every entry in `map`, in map order.
    pub fn new(map: &IncludeMap) -> Result<Self, ReplaceError> {
        let rules = map
            .iter()
            .map(|(token, resolved)| -> Result<Rule, ReplaceError> {
                let pattern = format!(r#"#include\s*["<]{}[">]"#, regex::escape(token));
                let pattern = Regex::new(&pattern).map_err(|source| ReplaceError::Pattern {
                    token: token.to_string(),
                    source,
                })?;
                Ok(Rule {
                    token: token.to_string(),
                    pattern,
                    replacement: format!("#include \"{resolved}\""),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `content`.
    ///
    /// Borrows the input when nothing matched.
    pub fn rewrite_content<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(content);
        for rule in &self.rules {
            if !out.contains(rule.token.as_str()) {
                continue;
            }
            let replaced = match rule.pattern.replace_all(&out, NoExpand(&rule.replacement)) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            out = Cow::Owned(replaced);
        }
        out
    }

    /// Rewrite `path` in place.
    ///
    /// The file is always written back, even when no directive changed.
    /// Returns whether the content differs from what was read.
    pub fn rewrite_file(&self, path: &Path) -> Result<bool, ReplaceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReplaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let rewritten = self.rewrite_content(&content);
        let changed = rewritten != content;

        std::fs::write(path, rewritten.as_bytes()).map_err(|source| ReplaceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), changed, "Rewrote file");
        Ok(changed)
    }
}
