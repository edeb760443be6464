#![deny(unsafe_code)]

//! increwrite core — include scanning, resolution, and rewriting.
//!
//! A run is a batch transformation over a C source tree:
//!
//! 1. [`enumerate`] finds the `.c`/`.h` files,
//! 2. [`extract`] pulls the `#include` tokens out of each one,
//! 3. [`resolve`] maps every token to the tree-relative path of the file
//!    sharing its basename,
//! 4. [`rewrite`] substitutes those paths back into the target files.
//!
//! [`pipeline::process_folder`] drives the four steps from a
//! [`ReplacerConfig`](increwrite_config::ReplacerConfig).

use std::path::PathBuf;

/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// Recursive source file discovery.
pub mod enumerate;
/// `#include` token extraction.
pub mod extract;
/// End-to-end scan/resolve/rewrite pass.
pub mod pipeline;
/// Basename-driven include resolution.
pub mod resolve;
/// In-place directive substitution.
pub mod rewrite;

pub use pipeline::{RunReport, process_folder};
pub use resolve::{IncludeMap, resolve_includes};
pub use rewrite::Rewriter;

/// Errors that abort a run.
///
/// There is no per-file recovery: the first failing file stops the pass,
/// and files already rewritten stay rewritten.
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid include pattern for {token:?}: {source}")]
    Pattern {
        token: String,
        #[source]
        source: regex::Error,
    },
}
