//! Doxygen tag stripping.

use std::sync::LazyLock;

use regex::Regex;

/// Standalone `@author` line, including its newline.
static AUTHOR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*@author\b.*\n?").unwrap());

/// `@brief` tag and the whitespace after it.
static BRIEF_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@brief\s+").unwrap());

/// Remove `@author` lines and inline `@brief` tags left in by doxide.
///
/// The text following `@brief` is kept.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let text = AUTHOR_LINE_RE.replace_all(text, "");
    BRIEF_TAG_RE.replace_all(&text, "").into_owned()
}
