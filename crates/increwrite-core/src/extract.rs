//! `#include` token extraction.
//!
//! Only the textual directive is recognised: `#include`, optional
//! whitespace, then a token delimited by `"..."` or `<...>`. Conditional
//! compilation and macro-expanded include paths are not interpreted.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::ReplaceError;

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#include\s*["<]([^">]*)[">]"#).expect("include pattern is a valid regex")
});

/// Extract include tokens from source text, in order of appearance.
///
/// At most one token is taken per line (the first directive on it).
/// `\n`, `\r\n` and a lone `\r` all end a line. Duplicates are kept.
pub fn extract_tokens(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r'])
        .filter_map(|line| INCLUDE_RE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read `path` and extract its include tokens.
///
/// Read and UTF-8 decode failures are returned as [`ReplaceError::Read`].
pub fn read_include_tokens(path: &Path) -> Result<Vec<String>, ReplaceError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReplaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_tokens(&content))
}
