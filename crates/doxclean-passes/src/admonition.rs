//! Admonition body reindentation.
//!
//! doxide indents admonition bodies by a single space:
//!
//! ```text
//! !!! note
//!  Body text.
//! ```
//!
//! MkDocs Material only treats a line as part of the admonition when it is
//! indented by four spaces, so body lines are rewritten to that depth.

use std::sync::LazyLock;

use regex::Regex;

/// Opening line of an admonition block (`!!! note`, `!!! warning "Title"`).
static OPENING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^!!! \w+").unwrap());

/// Body line with exactly one space of indentation.
static SHALLOW_BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ (\S.*)").unwrap());

const BODY_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any admonition.
    Normal,
    /// After an opening line, consuming indented body lines.
    InAdmonition,
}

/// Reindent admonition bodies from one space to four spaces.
///
/// Lines indented by two or more spaces inside an admonition are normalized
/// to exactly four spaces, so running the pass again is a no-op. A blank or
/// unindented line ends the block and is emitted unchanged.
///
/// # Example
///
/// ```
/// use doxclean_passes::fix_admonition_indent;
///
/// let output = fix_admonition_indent("!!! note\n body text\n  more\nnext");
/// assert_eq!(output, "!!! note\n    body text\n    more\nnext");
/// ```
#[must_use]
pub fn fix_admonition_indent(text: &str) -> String {
    let mut state = State::Normal;
    let mut out: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if OPENING_RE.is_match(line) {
            state = State::InAdmonition;
            out.push(line.to_owned());
            continue;
        }

        if state == State::InAdmonition {
            if let Some(caps) = SHALLOW_BODY_RE.captures(line) {
                out.push(format!("{BODY_INDENT}{}", &caps[1]));
                continue;
            }
            if line.starts_with("  ") {
                out.push(format!("{BODY_INDENT}{}", line.trim_start()));
                continue;
            }
            state = State::Normal;
        }

        out.push(line.to_owned());
    }

    out.join("\n")
}
