//! Namespace definition list flattening.
//!
//! doxide lists namespaces on the home page as definition lists:
//!
//! ```text
//! :material-package: [Name](name.md)
//! :    Description
//! ```
//!
//! which renders the description on its own line. Entries are rewritten as
//! single-line bullets instead:
//!
//! ```text
//! - :material-package: [Name](name.md) - Description
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Icon prefixes that mark a definition list term.
const TERM_MARKERS: [&str; 2] = [":material-package:", ":material-format-section:"];

/// Definition list description line (`:` followed by whitespace).
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:\s+(.*)$").unwrap());

/// Collapse namespace definition list entries into bullet lines.
///
/// A term line may be followed by one description line, which is consumed.
/// One blank line after each entry is dropped so consecutive entries form a
/// single bullet list.
///
/// # Example
///
/// ```
/// use doxclean_passes::flatten_namespace_lists;
///
/// let input = ":material-package: [Core](core.md)\n:    Core utilities.\n";
/// let output = flatten_namespace_lists(input);
/// assert_eq!(output, "- :material-package: [Core](core.md) - Core utilities.\n");
/// ```
#[must_use]
pub fn flatten_namespace_lists(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let term = line.trim();

        if !is_term(term) {
            out.push(line.to_owned());
            i += 1;
            continue;
        }

        let mut desc = "";
        if let Some(caps) = lines.get(i + 1).and_then(|next| DESCRIPTION_RE.captures(next)) {
            desc = caps.get(1).map_or("", |m| m.as_str()).trim();
            i += 1;
        }

        if desc.is_empty() {
            out.push(format!("- {term}"));
        } else {
            out.push(format!("- {term} - {desc}"));
        }

        i += 1;
        // The last segment is what follows the final newline, not a blank line.
        if i + 1 < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
    }

    out.join("\n")
}

fn is_term(trimmed: &str) -> bool {
    TERM_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
}
