//! Directory traversal for input enumeration.
//!
//! Traversal is a seam: the input collector takes any
//! [`DirectoryTraverser`], so tests can substitute a fake and callers can
//! supply their own policy. [`WalkDirTraverser`] is the default
//! implementation, walking a subtree in sorted order and skipping entries
//! by file name.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Enumerates all files under a root, subject to implementation policy.
pub trait DirectoryTraverser {
  /// Return every file under `root`, ordered by path.
  fn find_files(&self, root: &Path) -> io::Result<BTreeSet<PathBuf>>;
}

/// A [`DirectoryTraverser`] over the real filesystem.
///
/// Walks the subtree in sorted order and returns regular files only.
/// Entries whose file name appears in the exclusion list are skipped
/// together with everything beneath them.
#[derive(Debug, Default)]
pub struct WalkDirTraverser {
  exclude: Vec<String>,
}

impl WalkDirTraverser {
  /// Create a traverser with no exclusions.
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a traverser that skips entries with the given file names.
  ///
  /// Typical exclusions are VCS metadata and scratch directories, e.g.
  /// `[".git", "tmp"]`.
  pub fn with_exclusions(exclude: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      exclude: exclude.into_iter().map(Into::into).collect(),
    }
  }
}

impl DirectoryTraverser for WalkDirTraverser {
  fn find_files(&self, root: &Path) -> io::Result<BTreeSet<PathBuf>> {
    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|e| {
      e.file_name()
        .to_str()
        .map(|name| !self.exclude.iter().any(|ex| ex == name))
        .unwrap_or(true)
    });

    let mut files = BTreeSet::new();
    for entry in walker {
      let entry = entry.map_err(io::Error::from)?;
      if entry.file_type().is_file() {
        files.insert(entry.into_path());
      }
    }

    Ok(files)
  }
}
