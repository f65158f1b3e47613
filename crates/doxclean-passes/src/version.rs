//! Home page version injection.

use regex::{Captures, Regex};

/// Add a `**v<version>** | ` tag in front of the home page subtitle.
///
/// The home page is recognized by an H1 line exactly equal to
/// `# <home_title>` followed by a blank line and a subtitle line. Only the
/// first such header is rewritten. An empty version leaves the text unchanged.
///
/// The header still matches after injection, so applying this twice stacks
/// two version tags.
///
/// # Example
///
/// ```
/// use doxclean_passes::inject_version;
///
/// let output = inject_version("# whois\n\nA lookup tool.\n", "whois", "2.1.0");
/// assert_eq!(output, "# whois\n\n**v2.1.0** | A lookup tool.\n");
/// ```
#[must_use]
pub fn inject_version(text: &str, home_title: &str, version: &str) -> String {
    if version.is_empty() {
        return text.to_owned();
    }

    let pattern = format!(r"(?m)^(# {})\n\n(.+)$", regex::escape(home_title));
    let Ok(header_re) = Regex::new(&pattern) else {
        return text.to_owned();
    };

    header_re
        .replacen(text, 1, |caps: &Captures| {
            format!("{}\n\n**v{version}** | {}", &caps[1], &caps[2])
        })
        .into_owned()
}
