//! One scan/resolve/rewrite pass over a source tree.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use increwrite_config::ReplacerConfig;

use crate::ReplaceError;
use crate::enumerate::find_files;
use crate::extract::read_include_tokens;
use crate::resolve::resolve_includes;
use crate::rewrite::Rewriter;

/// Counts gathered during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files scanned for include tokens (the whole tree).
    pub files_scanned: usize,
    /// Distinct include tokens seen across the tree.
    pub tokens_found: usize,
    /// Tokens that resolved to a file in the tree.
    pub tokens_resolved: usize,
    /// Files written back by the rewrite step.
    pub files_rewritten: usize,
    /// Rewritten files whose content changed.
    pub files_changed: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned {} files, resolved {}/{} includes, rewrote {} files ({} changed)",
            self.files_scanned,
            self.tokens_resolved,
            self.tokens_found,
            self.files_rewritten,
            self.files_changed
        )
    }
}

/// Run the full pass described by `config`.
///
/// Tokens are collected from, and resolved against, the whole tree even
/// when `config.only` narrows the set of files that get rewritten: an
/// in-scope file may include a header that lives outside the selection.
pub fn process_folder(config: &ReplacerConfig) -> Result<RunReport, ReplaceError> {
    let root = config.root.as_path();
    let mut report = RunReport::default();

    let all_files = find_files(root, &config.extensions, None);
    report.files_scanned = all_files.len();
    info!(root = %root.display(), files = all_files.len(), "Collecting #include paths");

    let mut tokens = BTreeSet::new();
    for path in &all_files {
        let found = read_include_tokens(path)?;
        debug!(path = %path.display(), includes = found.len(), "Scanned file");
        tokens.extend(found);
    }
    report.tokens_found = tokens.len();

    let map = resolve_includes(root, &tokens);
    report.tokens_resolved = map.len();
    let rewriter = Rewriter::new(&map)?;

    let targets = match config.only() {
        Some(only) => find_files(root, &config.extensions, Some(only)),
        None => all_files,
    };
    info!(files = targets.len(), "Replacing #include paths");

    for path in &targets {
        if rewriter.rewrite_file(path)? {
            report.files_changed += 1;
        }
        report.files_rewritten += 1;
    }

    info!(
        rewritten = report.files_rewritten,
        changed = report.files_changed,
        "Finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = RunReport {
            files_scanned: 3,
            tokens_found: 4,
            tokens_resolved: 2,
            files_rewritten: 3,
            files_changed: 1,
        };
        assert_eq!(
            report.to_string(),
            "scanned 3 files, resolved 2/4 includes, rewrote 3 files (1 changed)"
        );
    }
}
