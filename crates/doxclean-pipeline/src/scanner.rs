//! Markdown file discovery by filesystem walking.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collects `.md` files below a root directory.
pub(crate) struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `root`.
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the tree and return every markdown file, sorted by path.
    ///
    /// Unreadable directories below the root are skipped.
    pub(crate) fn scan(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        // The root itself must be readable.
        fs::read_dir(&self.root)?;
        scan_directory(&self.root, &mut files);
        files.sort();
        Ok(files)
    }
}

fn scan_directory(dir_path: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        tracing::warn!(path = %dir_path.display(), "Failed to read directory, skipping");
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            scan_directory(&path, files);
        } else if path.extension().is_some_and(|e| e == "md") {
            files.push(path);
        }
    }
}
