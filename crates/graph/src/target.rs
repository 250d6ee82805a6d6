//! Build target identifiers.
//!
//! A [`BuildTarget`] is the immutable symbolic name of a buildable unit,
//! written in the fully-qualified form `//base/path:name`. Targets are the
//! keys of the whole system: rules are keyed by them, registries look them
//! up, and error messages name them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when parsing a malformed target string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
  /// The string does not start with `//`.
  #[error("target '{0}' must start with '//'")]
  MissingPrefix(String),

  /// The string has no `:` separating base path from name.
  #[error("target '{0}' is missing a ':name' suffix")]
  MissingName(String),

  /// The part after `:` is empty.
  #[error("target '{0}' has an empty name")]
  EmptyName(String),
}

/// A globally unique symbolic identifier for a buildable unit.
///
/// Targets are immutable after creation. Equality, ordering, and hashing are
/// by identifier value: base path first, then short name. This gives every
/// collection keyed by targets a stable, deterministic order.
///
/// Serialized as the fully-qualified string form, e.g. `"//app/core:lib"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildTarget {
  /// Package path relative to the build root, without the `//` prefix.
  base_path: String,

  /// The short name within the package (the part after `:`).
  name: String,
}

impl BuildTarget {
  /// Create a target from an already-split base path and name.
  pub fn new(base_path: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      base_path: base_path.into(),
      name: name.into(),
    }
  }

  /// Parse a fully-qualified target string of the form `//base/path:name`.
  pub fn parse(s: &str) -> Result<Self, TargetParseError> {
    let Some(rest) = s.strip_prefix("//") else {
      return Err(TargetParseError::MissingPrefix(s.to_string()));
    };

    let Some((base_path, name)) = rest.split_once(':') else {
      return Err(TargetParseError::MissingName(s.to_string()));
    };

    if name.is_empty() {
      return Err(TargetParseError::EmptyName(s.to_string()));
    }

    Ok(Self::new(base_path, name))
  }

  /// The package path, without the `//` prefix.
  pub fn base_path(&self) -> &str {
    &self.base_path
  }

  /// The short name within the package.
  pub fn short_name(&self) -> &str {
    &self.name
  }

  /// The fully-qualified form, `//base/path:name`.
  pub fn fully_qualified_name(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "//{}:{}", self.base_path, self.name)
  }
}

impl FromStr for BuildTarget {
  type Err = TargetParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl TryFrom<String> for BuildTarget {
  type Error = TargetParseError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    Self::parse(&s)
  }
}

impl From<BuildTarget> for String {
  fn from(target: BuildTarget) -> String {
    target.to_string()
  }
}
