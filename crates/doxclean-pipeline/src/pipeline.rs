//! Directory pipeline over doxide-generated markdown.
//!
//! Each markdown file under the docs root is read, checked for the doxide
//! marker, run through [`doxclean_passes::clean`], and written back only if
//! its content changed. The top-level `index.md` additionally receives the
//! project version.

use std::fs;
use std::path::{Path, PathBuf};

use doxclean_passes::{clean, inject_version, is_doxide_generated};

use crate::scanner::Scanner;

/// File name of the home page, relative to the docs root.
const HOME_PAGE: &str = "index.md";

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Docs root scanned recursively for `.md` files.
    pub docs_dir: PathBuf,
    /// H1 title of the home page header receiving the version.
    pub home_title: String,
    /// Version injected into the home page, if resolved.
    pub version: Option<String>,
}

/// Error returned by [`Pipeline::run`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Markdown files found under the docs root.
    pub scanned: usize,
    /// Files skipped because they lack the doxide marker.
    pub skipped: usize,
    /// Rewritten files, relative to the docs root.
    pub cleaned: Vec<PathBuf>,
}

impl PipelineReport {
    /// Number of files written back.
    #[must_use]
    pub fn changed(&self) -> usize {
        self.cleaned.len()
    }
}

/// Applies the cleaning passes to every doxide file under a docs root.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
///
/// use doxclean_pipeline::{Pipeline, PipelineConfig};
///
/// let pipeline = Pipeline::new(PipelineConfig {
///     docs_dir: PathBuf::from("docs"),
///     home_title: "whois".to_owned(),
///     version: Some("0.1.0".to_owned()),
/// });
/// let report = pipeline.run(|path| println!("cleaned {}", path.display()))?;
/// println!("{} file(s) cleaned", report.changed());
/// # Ok::<(), doxclean_pipeline::PipelineError>(())
/// ```
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Clean every eligible file, calling `on_cleaned` with the relative path
    /// of each file written back.
    ///
    /// Stops at the first read or write failure.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NotADirectory`] if the docs root is not a
    /// directory, and [`PipelineError::Io`] on filesystem failures.
    pub fn run(
        &self,
        mut on_cleaned: impl FnMut(&Path),
    ) -> Result<PipelineReport, PipelineError> {
        let docs_dir = &self.config.docs_dir;
        if !docs_dir.is_dir() {
            return Err(PipelineError::NotADirectory(docs_dir.clone()));
        }

        let files = Scanner::new(docs_dir.clone())
            .scan()
            .map_err(|source| PipelineError::Io {
                path: docs_dir.clone(),
                source,
            })?;

        let mut report = PipelineReport {
            scanned: files.len(),
            ..PipelineReport::default()
        };

        for path in files {
            let relative = path.strip_prefix(docs_dir).unwrap_or(&path).to_path_buf();
            match self.process_file(&path, &relative)? {
                FileOutcome::Skipped => {
                    tracing::debug!(path = %relative.display(), "No doxide marker, skipping");
                    report.skipped += 1;
                }
                FileOutcome::Unchanged => {}
                FileOutcome::Cleaned => {
                    tracing::info!(path = %relative.display(), "Cleaned file");
                    on_cleaned(&relative);
                    report.cleaned.push(relative);
                }
            }
        }

        tracing::debug!(
            scanned = report.scanned,
            skipped = report.skipped,
            changed = report.changed(),
            "Pipeline completed"
        );
        Ok(report)
    }

    /// Clean one file in place.
    fn process_file(&self, path: &Path, relative: &Path) -> Result<FileOutcome, PipelineError> {
        let io_error = |source: std::io::Error| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        };

        let original = fs::read_to_string(path).map_err(io_error)?;
        if !is_doxide_generated(&original) {
            return Ok(FileOutcome::Skipped);
        }

        let cleaned = self.transform(&original, relative == Path::new(HOME_PAGE));
        if cleaned == original {
            return Ok(FileOutcome::Unchanged);
        }

        fs::write(path, cleaned).map_err(io_error)?;
        Ok(FileOutcome::Cleaned)
    }

    /// Run the passes over one document's text.
    fn transform(&self, original: &str, is_home: bool) -> String {
        let cleaned = clean(original);
        match &self.config.version {
            Some(version) if is_home => {
                inject_version(&cleaned, &self.config.home_title, version)
            }
            _ => cleaned,
        }
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    /// No doxide marker; left untouched.
    Skipped,
    /// Eligible, but the passes produced identical text.
    Unchanged,
    /// Rewritten on disk.
    Cleaned,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    const FRONT_MATTER: &str = "---\ngenerator: doxide\n---\n\n";

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn pipeline(docs_dir: &Path, version: Option<&str>) -> Pipeline {
        Pipeline::new(PipelineConfig {
            docs_dir: docs_dir.to_path_buf(),
            home_title: "whois".to_owned(),
            version: version.map(str::to_owned),
        })
    }

    fn write_docs(root: &Path) {
        fs::create_dir_all(root.join("core")).unwrap();
        fs::write(
            root.join("index.md"),
            format!(
                "{FRONT_MATTER}# whois\n\nA lookup tool.\n\n\
                 :material-package: [core](core/index.md)\n\
                 :    Core utilities.\n"
            ),
        )
        .unwrap();
        fs::write(
            root.join("core/index.md"),
            format!(
                "{FRONT_MATTER}# Core\n\n## Functions\n\n\
                 | [run](run.md) | @brief Runs it. With detail. |\n"
            ),
        )
        .unwrap();
        fs::write(root.join("core/clean.md"), format!("{FRONT_MATTER}Nothing here.\n")).unwrap();
        fs::write(root.join("guide.md"), "# Core\n\n!!! note\n hand-written\n").unwrap();
    }

    #[test]
    fn test_run_cleans_marked_files() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        write_docs(root);

        let mut seen = Vec::new();
        let report = pipeline(root, Some("2.1.0"))
            .run(|path| seen.push(path.to_path_buf()))
            .unwrap();

        assert_eq!(report.scanned, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.cleaned,
            vec![PathBuf::from("core/index.md"), PathBuf::from("index.md")]
        );
        assert_eq!(seen, report.cleaned);

        assert_eq!(
            fs::read_to_string(root.join("index.md")).unwrap(),
            format!(
                "{FRONT_MATTER}# whois\n\n**v2.1.0** | A lookup tool.\n\n\
                 - :material-package: [core](core/index.md) - Core utilities.\n"
            )
        );
        assert_eq!(
            fs::read_to_string(root.join("core/index.md")).unwrap(),
            format!(
                "{FRONT_MATTER}# :material-cube-outline: Core\n\n\
                 ## :material-function: Functions\n\n\
                 | [run](run.md) | Runs it. |\n"
            )
        );
    }

    #[test]
    fn test_unmarked_file_untouched() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        write_docs(root);

        pipeline(root, None).run(|_| {}).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("guide.md")).unwrap(),
            "# Core\n\n!!! note\n hand-written\n"
        );
    }

    #[test]
    fn test_unchanged_file_not_written() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        write_docs(root);
        let path = root.join("core/clean.md");
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let report = pipeline(root, None).run(|_| {}).unwrap();

        assert!(!report.cleaned.contains(&PathBuf::from("core/clean.md")));
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_second_run_without_version_changes_nothing() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        write_docs(root);

        let first = pipeline(root, None).run(|_| {}).unwrap();
        assert_eq!(first.changed(), 2);

        let second = pipeline(root, None).run(|_| {}).unwrap();
        assert_eq!(second.changed(), 0);
    }

    #[test]
    fn test_second_run_with_version_restamps_home_page() {
        // Known limitation: version injection is not idempotent.
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        write_docs(root);

        pipeline(root, Some("2.1.0")).run(|_| {}).unwrap();
        let second = pipeline(root, Some("2.1.0")).run(|_| {}).unwrap();

        assert_eq!(second.cleaned, vec![PathBuf::from("index.md")]);
        let home = fs::read_to_string(root.join("index.md")).unwrap();
        assert!(home.contains("**v2.1.0** | **v2.1.0** | A lookup tool."));
    }

    #[test]
    fn test_version_only_on_top_level_index() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        let page = format!("{FRONT_MATTER}# whois\n\nSubtitle\n");
        fs::write(root.join("sub/index.md"), &page).unwrap();
        fs::write(root.join("other.md"), &page).unwrap();

        let report = pipeline(root, Some("1.0.0")).run(|_| {}).unwrap();

        assert!(report.cleaned.is_empty());
        assert_eq!(fs::read_to_string(root.join("sub/index.md")).unwrap(), page);
    }

    #[test]
    fn test_without_version_home_page_not_stamped() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        let page = format!("{FRONT_MATTER}# whois\n\nSubtitle\n");
        fs::write(root.join("index.md"), &page).unwrap();

        let report = pipeline(root, None).run(|_| {}).unwrap();

        assert_eq!(report.changed(), 0);
        assert_eq!(fs::read_to_string(root.join("index.md")).unwrap(), page);
    }

    #[test]
    fn test_not_a_directory() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("file.md");
        fs::write(&file, "").unwrap();

        let err = pipeline(&file, None).run(|_| {}).unwrap_err();
        assert!(
            matches!(err, PipelineError::NotADirectory(_)),
            "Expected PipelineError::NotADirectory, got {err:?}"
        );
        assert!(err.to_string().contains("is not a directory"));

        let missing = temp_dir.path().join("missing");
        let err = pipeline(&missing, None).run(|_| {}).unwrap_err();
        assert!(matches!(err, PipelineError::NotADirectory(_)));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let temp_dir = create_test_dir();
        let root = temp_dir.path();
        fs::write(root.join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

        let err = pipeline(root, None).run(|_| {}).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
