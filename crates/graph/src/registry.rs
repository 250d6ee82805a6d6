//! Rule registry lookup.
//!
//! The registry maps each [`BuildTarget`] to at most one rule. Construction
//! of the rule graph (build-file parsing, node creation) belongs to the
//! layer above; this module only defines the lookup seam the resolver needs
//! plus an in-memory implementation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::rule::RuleRef;
use crate::target::BuildTarget;

/// Lookup table from target to rule.
///
/// Implementations must be read-stable for the duration of a resolution
/// pass: the same target never maps to two different rules within one pass.
pub trait RuleRegistry {
  /// Look up the rule for a target, if one exists.
  fn get_rule(&self, target: &BuildTarget) -> Option<RuleRef>;
}

/// An in-memory registry backed by an ordered map.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
  rules: BTreeMap<BuildTarget, RuleRef>,
}

impl InMemoryRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a rule under its own target.
  ///
  /// If the target was already registered, the new rule replaces the old
  /// one and the displaced rule is returned.
  pub fn insert(&mut self, rule: RuleRef) -> Option<RuleRef> {
    let target = rule.build_target().clone();
    let displaced = self.rules.insert(target.clone(), rule);
    if displaced.is_some() {
      debug!(rule = %target, "replaced existing rule in registry");
    }
    displaced
  }

  /// Number of registered rules.
  pub fn len(&self) -> usize {
    self.rules.len()
  }

  /// Whether the registry is empty.
  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  /// Iterate over all registered rules in target order.
  pub fn rules(&self) -> impl Iterator<Item = &RuleRef> {
    self.rules.values()
  }
}

impl RuleRegistry for InMemoryRegistry {
  fn get_rule(&self, target: &BuildTarget) -> Option<RuleRef> {
    self.rules.get(target).cloned()
  }
}
