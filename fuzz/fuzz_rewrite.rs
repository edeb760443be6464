//! Fuzz target for directive rewriting.
//!
//! Run with: cargo +nightly fuzz run fuzz_rewrite
//!
//! Every extracted token is mapped to a path derived from its basename and
//! the buffer is rewritten twice; neither pass may panic.

#![no_main]

use increwrite_core::resolve::token_basename;
use increwrite_core::{IncludeMap, Rewriter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let mut map = IncludeMap::new();
    for token in increwrite_core::extract::extract_tokens(s) {
        let basename = token_basename(&token);
        if basename.is_empty() {
            continue;
        }
        let resolved = format!("inc/{basename}");
        map.insert(token, resolved);
    }

    let Ok(rewriter) = Rewriter::new(&map) else {
        return;
    };
    let once = rewriter.rewrite_content(s).into_owned();
    let _ = rewriter.rewrite_content(&once);
});
