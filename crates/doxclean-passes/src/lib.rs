//! Text passes that adapt doxide-generated markdown to MkDocs Material.
//!
//! Every pass is a `&str -> String` rewrite over raw text. Passes match line
//! prefixes and exact heading text instead of parsing markdown, and leave any
//! line outside their target pattern untouched.
//!
//! [`clean`] runs the passes in order:
//!
//! 1. [`strip_tags`]: drop `@author` lines and `@brief` tags
//! 2. [`fix_admonition_indent`]: 1-space admonition bodies to 4 spaces
//! 3. [`add_page_title_icons`] and [`add_section_icons`]
//! 4. [`trim_function_table_descriptions`]
//! 5. [`flatten_namespace_lists`]
//!
//! Every pass in [`clean`] is idempotent, with one exception: a page title
//! that appears more than once gets its icon on the first occurrence only, so
//! each further run iconizes the next duplicate. [`inject_version`] is applied
//! separately to the home page only and is not idempotent either.
//!
//! # Example
//!
//! ```
//! use doxclean_passes::{clean, is_doxide_generated};
//!
//! let page = "---\ngenerator: doxide\n---\n\n# Core\n\n!!! note\n @brief Read this.\n";
//! assert!(is_doxide_generated(page));
//! assert_eq!(
//!     clean(page),
//!     "---\ngenerator: doxide\n---\n\n# :material-cube-outline: Core\n\n!!! note\n    Read this.\n"
//! );
//! ```

mod admonition;
mod icons;
mod namespace;
mod table;
mod tags;
mod version;

pub use admonition::fix_admonition_indent;
pub use icons::{PAGE_TITLE_ICONS, SECTION_ICONS, add_page_title_icons, add_section_icons};
pub use namespace::flatten_namespace_lists;
pub use table::trim_function_table_descriptions;
pub use tags::strip_tags;
pub use version::inject_version;

/// Front matter signature written by doxide.
pub const DOXIDE_MARKER: &str = "generator: doxide";

/// Number of leading characters searched for [`DOXIDE_MARKER`].
pub const MARKER_WINDOW: usize = 200;

/// Check whether a document was generated by doxide.
///
/// Only the first [`MARKER_WINDOW`] characters are searched, so the marker
/// must appear in the front matter.
#[must_use]
pub fn is_doxide_generated(text: &str) -> bool {
    let head = text
        .char_indices()
        .nth(MARKER_WINDOW)
        .map_or(text, |(end, _)| &text[..end]);
    head.contains(DOXIDE_MARKER)
}

/// Apply every document pass in pipeline order.
#[must_use]
pub fn clean(text: &str) -> String {
    let text = strip_tags(text);
    let text = fix_admonition_indent(&text);
    let text = add_page_title_icons(&text);
    let text = add_section_icons(&text);
    let text = trim_function_table_descriptions(&text);
    flatten_namespace_lists(&text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FRONT_MATTER: &str = "---\ntitle: Core\ngenerator: doxide\n---\n\n";

    #[test]
    fn test_marker_detected_in_front_matter() {
        assert!(is_doxide_generated(FRONT_MATTER));
        assert!(!is_doxide_generated("# Hand-written page\n"));
    }

    #[test]
    fn test_marker_outside_window_ignored() {
        let late = format!("{}{DOXIDE_MARKER}", "x".repeat(MARKER_WINDOW));
        assert!(!is_doxide_generated(&late));

        let edge = format!("{}{DOXIDE_MARKER}", "x".repeat(MARKER_WINDOW - DOXIDE_MARKER.len()));
        assert!(is_doxide_generated(&edge));
    }

    #[test]
    fn test_marker_window_counts_characters() {
        // Multi-byte characters count once each.
        let prefix = "é".repeat(MARKER_WINDOW - DOXIDE_MARKER.len());
        assert!(is_doxide_generated(&format!("{prefix}{DOXIDE_MARKER}")));
    }

    fn sample_page() -> String {
        format!(
            "{FRONT_MATTER}# Core\n\
             \n\
             @author Jane\n\
             \n\
             !!! note\n \
             @brief Body line.\n  \
             deeper\n\
             \n\
             ## Functions\n\
             \n\
             | Name | Description |\n\
             | --- | --- |\n\
             | [run](run.md) | @brief Runs it. Then more detail. |\n\
             \n\
             ## Namespaces\n\
             \n\
             :material-package: [net](net.md)\n\
             :    Networking.\n\
             \n\
             :material-format-section: [misc](misc.md)\n\
             \n\
             ## Function Details\n"
        )
    }

    #[test]
    fn test_clean_full_page() {
        let output = clean(&sample_page());
        let expected = format!(
            "{FRONT_MATTER}# :material-cube-outline: Core\n\
             \n\
             !!! note\n    \
             Body line.\n    \
             deeper\n\
             \n\
             ## :material-function: Functions\n\
             \n\
             | Name | Description |\n\
             | --- | --- |\n\
             | [run](run.md) | Runs it. |\n\
             \n\
             ## Namespaces\n\
             \n\
             - :material-package: [net](net.md) - Networking.\n\
             - :material-format-section: [misc](misc.md)\n\
             ## :material-function: Function Details\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_clean_idempotent() {
        let once = clean(&sample_page());
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn test_clean_duplicate_title_not_idempotent() {
        let input = format!("{FRONT_MATTER}# Core\n\n# Core\n");
        let once = clean(&input);
        let twice = clean(&once);
        assert_eq!(
            twice,
            format!("{FRONT_MATTER}# :material-cube-outline: Core\n\n# :material-cube-outline: Core\n")
        );
        assert_ne!(once, twice);
    }

    #[test]
    fn test_clean_passes_through_plain_text() {
        let input = format!("{FRONT_MATTER}# Overview\n\nNothing to rewrite here.\n");
        assert_eq!(clean(&input), input);
    }
}
