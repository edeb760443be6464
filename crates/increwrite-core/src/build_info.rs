//! What was built, from where, and how.

use std::fmt;

/// Identity of the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Package version from Cargo.toml.
    pub version: &'static str,
    /// Abbreviated commit, suffixed `-dirty` for a modified checkout, or
    /// `unknown` when built outside git.
    pub commit: &'static str,
    /// Cargo profile: `debug` or `release`.
    pub profile: &'static str,
    /// Target triple.
    pub target: &'static str,
}

impl BuildInfo {
    pub fn is_release(&self) -> bool {
        self.profile == "release"
    }

    pub fn is_dirty(&self) -> bool {
        self.commit.ends_with("-dirty")
    }
}

/// `1.1.0 (3f2a9c1e0, release, x86_64-unknown-linux-gnu)`
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.version, self.commit, self.profile, self.target
        )
    }
}

pub const BUILD: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: env!("INCREWRITE_COMMIT"),
    profile: env!("INCREWRITE_PROFILE"),
    target: env!("INCREWRITE_TARGET"),
};

/// Text shown by `-v`/`--version`.
pub fn version_string() -> String {
    BUILD.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_lists_every_field() {
        let info = BuildInfo {
            version: "2.0.0",
            commit: "abc123def-dirty",
            profile: "release",
            target: "aarch64-apple-darwin",
        };
        assert_eq!(
            info.to_string(),
            "2.0.0 (abc123def-dirty, release, aarch64-apple-darwin)"
        );
        assert!(info.is_release());
        assert!(info.is_dirty());
    }

    #[test]
    fn test_current_build() {
        assert_eq!(BUILD.version, env!("CARGO_PKG_VERSION"));
        assert!(!BUILD.commit.is_empty());
        assert!(!BUILD.is_release());
        assert!(version_string().starts_with(BUILD.version));
    }
}
