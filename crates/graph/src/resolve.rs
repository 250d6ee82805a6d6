//! Target-to-rule resolution.
//!
//! The planner materializes dependency edges by handing a list of targets
//! to [`resolve_targets`], which looks each one up in the registry and
//! folds the hits into an ordered [`RuleSet`]. A miss is either fatal
//! (strict mode) or silently skipped (lenient mode), chosen per call.

use thiserror::Error;
use tracing::trace;

use crate::registry::RuleRegistry;
use crate::rule::{RuleRef, RuleSet};
use crate::target::BuildTarget;

/// Target resolution found no rule for a required target.
///
/// Fatal to the whole resolution call: no partial result is produced. The
/// message names both the unresolved target and the target that asked for
/// it, since that pair is what a user needs to fix their build file.
#[derive(Debug, Error)]
#[error("no rule found for {target} when processing {invoking}")]
pub struct MissingRuleError {
  /// The target that could not be resolved.
  pub target: BuildTarget,

  /// The target whose dependencies were being resolved.
  pub invoking: BuildTarget,
}

/// Resolve a sequence of targets against the registry.
///
/// Duplicated targets collapse into a single rule; the result is ordered by
/// rule identity regardless of input order. With `allow_missing` set,
/// unresolvable targets are skipped; otherwise the first miss aborts the
/// call with a [`MissingRuleError`] and no partial result.
pub fn resolve_targets<'a, R, I>(
  invoking: &BuildTarget,
  registry: &R,
  targets: I,
  allow_missing: bool,
) -> Result<RuleSet, MissingRuleError>
where
  R: RuleRegistry + ?Sized,
  I: IntoIterator<Item = &'a BuildTarget>,
{
  let mut rules = RuleSet::new();

  for target in targets {
    match registry.get_rule(target) {
      Some(rule) => {
        rules.insert(rule);
      }
      None if allow_missing => {
        trace!(missing = %target, invoking = %invoking, "skipping unresolved target");
      }
      None => {
        return Err(MissingRuleError {
          target: target.clone(),
          invoking: invoking.clone(),
        });
      }
    }
  }

  Ok(rules)
}

/// A reusable predicate testing whether a rule's own target equals `target`.
///
/// Pure and stateless; usable against any rule collection, ordered or not.
pub fn matches_target(target: BuildTarget) -> impl Fn(&RuleRef) -> bool {
  move |rule| *rule.build_target() == target
}
