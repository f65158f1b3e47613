//! Function summary table trimming.
//!
//! doxide occasionally copies full function documentation into the
//! description column of the `Functions` summary table. Rows inside that
//! section are cut down to their first sentence so the detail stays under
//! `Function Details`.

use std::sync::LazyLock;

use regex::Regex;

/// Headings that open the function summary table, with and without icon.
const FUNCTIONS_HEADINGS: [&str; 2] = ["## Functions", "## :material-function: Functions"];

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Shortest prefix ending in a period that is followed by more text.
static FIRST_SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?\.)\s+.*$").unwrap());

/// Trim description cells in the function summary table to one sentence.
///
/// The table section starts at a `## Functions` heading and ends at the next
/// `## ` heading. Header and separator rows are left alone since they do not
/// start with `| [`.
///
/// # Example
///
/// ```
/// use doxclean_passes::trim_function_table_descriptions;
///
/// let input = "## Functions\n\n| [foo](x) | Does a thing. Extra detail here. |\n";
/// let output = trim_function_table_descriptions(input);
/// assert_eq!(output, "## Functions\n\n| [foo](x) | Does a thing. |\n");
/// ```
#[must_use]
pub fn trim_function_table_descriptions(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_functions_table = false;

    for line in text.split('\n') {
        let stripped = line.trim();

        if FUNCTIONS_HEADINGS.contains(&stripped) {
            in_functions_table = true;
            out.push(line.to_owned());
            continue;
        }

        if in_functions_table && stripped.starts_with("## ") {
            in_functions_table = false;
            out.push(line.to_owned());
            continue;
        }

        if in_functions_table
            && stripped.starts_with("| [")
            && stripped.ends_with('|')
            && let Some(row) = trim_row(stripped)
        {
            out.push(row);
            continue;
        }

        out.push(line.to_owned());
    }

    out.join("\n")
}

/// Rebuild a `| name | description |` row with a one-sentence description.
///
/// Returns `None` when the row cannot be split into two cells.
fn trim_row(stripped: &str) -> Option<String> {
    let inner = stripped.trim_matches('|');
    let (name, desc) = inner.split_once('|')?;
    let name = name.trim();

    let desc = WHITESPACE_RE.replace_all(desc.trim(), " ");
    let desc = desc.trim();
    let brief = FIRST_SENTENCE_RE
        .captures(desc)
        .and_then(|caps| caps.get(1))
        .map_or(desc, |m| m.as_str());

    Some(format!("| {name} | {brief} |"))
}
