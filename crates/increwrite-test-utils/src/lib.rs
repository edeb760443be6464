#![deny(unsafe_code)]

//! Shared test utilities for the increwrite workspace.
//!
//! Provides throwaway C source trees and config builders so that
//! individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! increwrite-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod tree;

pub use config::TestConfigBuilder;
pub use tree::TestTree;
