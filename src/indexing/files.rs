//! Source file discovery
//!
//! Walks a directory with the `ignore` crate and yields every file whose
//! extension maps to a known language, in lexical order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Result, SigSearchError};
use crate::Lang;

/// A discovered file and its language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub lang: Lang,
    pub path: PathBuf,
}

/// Directory walk options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Include hidden files and directories
    pub hidden: bool,
    /// Honor `.gitignore`, `.ignore` and git exclude files
    pub respect_ignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            hidden: false,
            respect_ignore: true,
        }
    }
}

/// Collect all source files with a known language under `root`.
///
/// Entries are sorted by file name within each directory, so discovery order
/// is deterministic. A file given as `root` is returned on its own if its
/// language is known.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Result<Vec<SourceFile>> {
    if !root.exists() {
        return Err(SigSearchError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let walker = WalkBuilder::new(root)
        .hidden(!options.hidden)
        .ignore(options.respect_ignore)
        .git_ignore(options.respect_ignore)
        .git_global(options.respect_ignore)
        .git_exclude(options.respect_ignore)
        .parents(options.respect_ignore)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if let Ok(lang) = Lang::from_path(path) {
            files.push(SourceFile {
                lang,
                path: display_path(path).to_path_buf(),
            });
        }
    }

    debug!(root = %root.display(), count = files.len(), "collected source files");
    Ok(files)
}

/// Drop a leading `./` so paths read like a plain relative walk
fn display_path(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
