//! Material icon tokens for doxide page titles and section headers.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Icons prepended to H1 page titles, keyed by exact title text.
pub const PAGE_TITLE_ICONS: &[(&str, &str)] = &[
    ("Core", ":material-cube-outline:"),
    ("Rendering", ":material-palette:"),
    ("Configuration", ":material-cog-outline:"),
    ("Hooks", ":material-hook:"),
    ("Utilities", ":material-toolbox-outline:"),
];

/// Icons prepended to H2 section headers, keyed by exact header text.
///
/// Applied in slice order.
pub const SECTION_ICONS: &[(&str, &str)] = &[
    ("Types", ":material-shape-outline:"),
    ("Functions", ":material-function:"),
    ("Variables", ":material-variable:"),
    ("Macros", ":material-pound:"),
    ("Operators", ":material-math-compass:"),
    ("Type Aliases", ":material-link-variant:"),
    ("Type Details", ":material-shape-outline:"),
    ("Type Alias Details", ":material-link-variant:"),
    ("Function Details", ":material-function:"),
    ("Variable Details", ":material-variable:"),
    ("Macro Details", ":material-pound:"),
    ("Operator Details", ":material-math-compass:"),
];

/// Compiled `^# <title>$` pattern and its replacement, per page title.
static PAGE_TITLE_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    PAGE_TITLE_ICONS
        .iter()
        .map(|(title, icon)| {
            let pattern = format!(r"(?m)^# {}$", regex::escape(title));
            (Regex::new(&pattern).unwrap(), format!("# {icon} {title}"))
        })
        .collect()
});

/// Prepend icons to H1 page titles.
///
/// Only the first line exactly matching `# <title>` is rewritten for each
/// known title.
#[must_use]
pub fn add_page_title_icons(text: &str) -> String {
    let mut text = text.to_owned();
    for (pattern, replacement) in PAGE_TITLE_RULES.iter() {
        text = pattern.replacen(&text, 1, NoExpand(replacement)).into_owned();
    }
    text
}

/// Prepend icons to H2 section headers.
///
/// Every occurrence of `## <title>` is rewritten, including ones that do not
/// start a line.
#[must_use]
pub fn add_section_icons(text: &str) -> String {
    let mut text = text.to_owned();
    for (title, icon) in SECTION_ICONS {
        text = text.replace(&format!("## {title}"), &format!("## {icon} {title}"));
    }
    text
}
