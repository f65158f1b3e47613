//! Project version lookup from a C header.
//!
//! The version lives in `#define` lines such as:
//!
//! ```c
//! #define WHOIS_VERSION_MAJOR 0
//! #define WHOIS_VERSION_MINOR 1
//! #define WHOIS_VERSION_PATCH 0
//! ```

use std::fmt;
use std::path::Path;

use regex::Regex;

/// `MAJOR.MINOR.PATCH` version read from a header.
///
/// Components keep the digits exactly as written, so `01` stays `01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl VersionTriple {
    /// Parse `#define <PREFIX>_VERSION_{MAJOR,MINOR,PATCH} <digits>` lines.
    ///
    /// Returns `None` unless all three components are present.
    #[must_use]
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let component = |key: &str| -> Option<String> {
            let pattern = format!(
                r"#define\s+{}_VERSION_{key}\s+(\d+)",
                regex::escape(prefix)
            );
            let re = Regex::new(&pattern).ok()?;
            Some(re.captures(content)?.get(1)?.as_str().to_owned())
        };

        Some(Self {
            major: component("MAJOR")?,
            minor: component("MINOR")?,
            patch: component("PATCH")?,
        })
    }

    /// Read and parse a version header.
    ///
    /// A missing or unreadable header yields `None`, same as a partial one.
    #[must_use]
    pub fn from_header(path: &Path, prefix: &str) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Version header not readable");
                return None;
            }
        };
        let version = Self::parse(&content, prefix);
        if version.is_none() {
            tracing::debug!(path = %path.display(), prefix, "Version header incomplete");
        }
        version
    }
}
