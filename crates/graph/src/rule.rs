//! Build rules and the exports capability.
//!
//! A [`Rule`] is the resolved, concrete node behind a [`BuildTarget`]: it
//! knows its own identity and its direct dependency edges. Rules that
//! re-expose a subset of their dependencies to consumers additionally
//! implement [`ExportDependencies`], surfaced through
//! [`Rule::export_dependencies`]. The capability is tested by interface
//! satisfaction, never by inspecting the concrete type.
//!
//! Rules are owned by the registry and shared as [`RuleRef`] handles whose
//! equality and ordering delegate to the rule's target, so every
//! [`RuleSet`] is deterministic regardless of insertion order.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::target::BuildTarget;

/// An ordered, duplicate-free set of rules, keyed by rule identity.
pub type RuleSet = BTreeSet<RuleRef>;

/// A resolved build rule.
pub trait Rule: fmt::Debug + Send + Sync {
  /// The target this rule was resolved from. Unique per rule.
  fn build_target(&self) -> &BuildTarget;

  /// Direct dependency edges of this rule.
  fn deps(&self) -> &RuleSet;

  /// The exports capability, if this rule re-exposes dependencies.
  ///
  /// The default is `None`: a plain dependency node contributes nothing to
  /// exported-dependency aggregation.
  fn export_dependencies(&self) -> Option<&dyn ExportDependencies> {
    None
  }
}

/// Capability of a rule to re-expose a subset of its dependencies.
///
/// A consumer of a rule with this capability implicitly depends on every
/// rule in [`exported_deps`](ExportDependencies::exported_deps). The
/// exported set never contains the exporting rule itself.
pub trait ExportDependencies {
  /// The rules re-exposed to this rule's consumers.
  fn exported_deps(&self) -> &RuleSet;
}

/// A shared, cheaply clonable handle to a rule.
///
/// Equality, ordering, and hashing delegate to the rule's target, so two
/// handles to the same target collapse inside a [`RuleSet`].
#[derive(Clone)]
pub struct RuleRef(Arc<dyn Rule>);

impl RuleRef {
  /// Wrap a concrete rule in a shared handle.
  pub fn new(rule: impl Rule + 'static) -> Self {
    Self(Arc::new(rule))
  }
}

impl Deref for RuleRef {
  type Target = dyn Rule;

  fn deref(&self) -> &Self::Target {
    self.0.as_ref()
  }
}

impl fmt::Debug for RuleRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl PartialEq for RuleRef {
  fn eq(&self, other: &Self) -> bool {
    self.build_target() == other.build_target()
  }
}

impl Eq for RuleRef {}

impl PartialOrd for RuleRef {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for RuleRef {
  fn cmp(&self, other: &Self) -> Ordering {
    self.build_target().cmp(other.build_target())
  }
}

impl std::hash::Hash for RuleRef {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.build_target().hash(state);
  }
}

/// A plain dependency node with no exports capability.
#[derive(Debug)]
pub struct BasicRule {
  target: BuildTarget,
  deps: RuleSet,
}

impl BasicRule {
  /// Create a plain rule.
  pub fn new(target: BuildTarget, deps: RuleSet) -> Self {
    Self { target, deps }
  }
}

impl Rule for BasicRule {
  fn build_target(&self) -> &BuildTarget {
    &self.target
  }

  fn deps(&self) -> &RuleSet {
    &self.deps
  }
}

/// A rule that re-exposes a subset of its dependencies to consumers.
#[derive(Debug)]
pub struct ExportingRule {
  target: BuildTarget,
  deps: RuleSet,
  exported: RuleSet,
}

impl ExportingRule {
  /// Create an exporting rule.
  ///
  /// Any entry in `exported` carrying this rule's own target is dropped, so
  /// a rule can never export itself.
  pub fn new(target: BuildTarget, deps: RuleSet, mut exported: RuleSet) -> Self {
    exported.retain(|rule| *rule.build_target() != target);
    Self { target, deps, exported }
  }
}

impl Rule for ExportingRule {
  fn build_target(&self) -> &BuildTarget {
    &self.target
  }

  fn deps(&self) -> &RuleSet {
    &self.deps
  }

  fn export_dependencies(&self) -> Option<&dyn ExportDependencies> {
    Some(self)
  }
}

impl ExportDependencies for ExportingRule {
  fn exported_deps(&self) -> &RuleSet {
    &self.exported
  }
}
