//! Cacheable-input collection.
//!
//! Rules call [`collect_inputs`] while assembling the list of files that
//! feed their cache key. The collector folds every file found under a
//! directory into an ordered, duplicate-free accumulator; the actual walk
//! is delegated to a [`DirectoryTraverser`].

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::traverse::DirectoryTraverser;

/// An ordered, duplicate-free set of paths.
pub type PathSet = BTreeSet<PathBuf>;

/// Input enumeration failed due to an underlying I/O fault.
///
/// Fatal to the enclosing cache-input-collection step: a rule whose inputs
/// cannot be enumerated cannot be cached safely, so the failure is never
/// retried or swallowed here.
#[derive(Debug, Error)]
#[error("failed to traverse {}", dir.display())]
pub struct TraversalError {
  /// The directory whose traversal failed.
  pub dir: PathBuf,

  /// The underlying I/O fault.
  #[source]
  pub source: io::Error,
}

/// Merge every file under `dir` into `acc`.
///
/// An absent directory is a legal no-op, not an error. Duplicates collapse
/// and the accumulator stays ordered by path, so calling this twice with
/// the same directory changes nothing the second time.
pub fn collect_inputs(
  dir: Option<&Path>,
  acc: &mut PathSet,
  traverser: &dyn DirectoryTraverser,
) -> Result<(), TraversalError> {
  let Some(dir) = dir else {
    return Ok(());
  };

  let files = traverser.find_files(dir).map_err(|source| TraversalError {
    dir: dir.to_path_buf(),
    source,
  })?;

  debug!(dir = %dir.display(), files = files.len(), "collected cacheable inputs");
  acc.extend(files);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  use crate::traverse::WalkDirTraverser;

  /// Traverser returning a fixed path set, ignoring the root.
  struct FixedTraverser(PathSet);

  impl DirectoryTraverser for FixedTraverser {
    fn find_files(&self, _root: &Path) -> io::Result<PathSet> {
      Ok(self.0.clone())
    }
  }

  /// Traverser that always fails.
  struct FailingTraverser;

  impl DirectoryTraverser for FailingTraverser {
    fn find_files(&self, _root: &Path) -> io::Result<PathSet> {
      Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
  }

  fn paths(items: &[&str]) -> PathSet {
    items.iter().map(PathBuf::from).collect()
  }

  #[test]
  fn absent_directory_is_a_no_op() {
    let mut acc = paths(&["existing.txt"]);
    collect_inputs(None, &mut acc, &FailingTraverser).unwrap();
    assert_eq!(acc, paths(&["existing.txt"]));
  }

  #[test]
  fn merges_found_files_in_path_order() {
    let traverser = FixedTraverser(paths(&["src/b.c", "src/a.c"]));
    let mut acc = PathSet::new();

    collect_inputs(Some(Path::new("src")), &mut acc, &traverser).unwrap();

    let listed: Vec<&Path> = acc.iter().map(PathBuf::as_path).collect();
    assert_eq!(listed, vec![Path::new("src/a.c"), Path::new("src/b.c")]);
  }

  #[test]
  fn repeated_collection_adds_no_duplicates() {
    let traverser = FixedTraverser(paths(&["src/a.c", "src/b.c"]));
    let mut acc = PathSet::new();

    collect_inputs(Some(Path::new("src")), &mut acc, &traverser).unwrap();
    collect_inputs(Some(Path::new("src")), &mut acc, &traverser).unwrap();

    assert_eq!(acc.len(), 2);
  }

  #[test]
  fn accumulator_survives_across_directories() {
    let first = FixedTraverser(paths(&["src/a.c"]));
    let second = FixedTraverser(paths(&["res/icon.png"]));
    let mut acc = PathSet::new();

    collect_inputs(Some(Path::new("src")), &mut acc, &first).unwrap();
    collect_inputs(Some(Path::new("res")), &mut acc, &second).unwrap();

    assert_eq!(acc, paths(&["res/icon.png", "src/a.c"]));
  }

  #[test]
  fn traversal_failure_names_the_directory() {
    let mut acc = PathSet::new();
    let err = collect_inputs(Some(Path::new("src")), &mut acc, &FailingTraverser).unwrap_err();

    assert_eq!(err.dir, PathBuf::from("src"));
    assert_eq!(err.source.kind(), io::ErrorKind::PermissionDenied);
    assert!(acc.is_empty());
  }

  #[test]
  fn collects_from_real_filesystem() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("input.txt"), "data").unwrap();

    let mut acc = PathSet::new();
    collect_inputs(Some(temp.path()), &mut acc, &WalkDirTraverser::new()).unwrap();

    assert_eq!(acc.len(), 1);
    assert!(acc.contains(&temp.path().join("input.txt")));
  }
}
