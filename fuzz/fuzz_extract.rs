//! Fuzz target for include token extraction.
//!
//! Run with: cargo +nightly fuzz run fuzz_extract

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for token in increwrite_core::extract::extract_tokens(s) {
            assert!(!token.contains(['"', '>']));
        }
    }
});
