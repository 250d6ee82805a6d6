//! Exported-dependency aggregation.
//!
//! When computing visibility of re-exported dependencies, the planner scans
//! a set of rules and unions the exported set of every rule carrying the
//! exports capability. This is a single non-transitive pass: the exported
//! rules' own exports are not followed. Callers needing the transitive
//! closure iterate this operation themselves and own cycle avoidance.

use tracing::trace;

use crate::rule::{RuleRef, RuleSet};

/// Union the exported dependencies of every capable rule in `rules`.
///
/// Rules without the exports capability contribute nothing; a rule exported
/// by several sources appears once. The result is ordered by rule identity
/// regardless of input order or duplication.
pub fn collect_exported<'a, I>(rules: I) -> RuleSet
where
  I: IntoIterator<Item = &'a RuleRef>,
{
  let mut exported = RuleSet::new();

  for rule in rules {
    if let Some(exporter) = rule.export_dependencies() {
      trace!(
        rule = %rule.build_target(),
        exported = exporter.exported_deps().len(),
        "unioning exported dependencies"
      );
      exported.extend(exporter.exported_deps().iter().cloned());
    }
  }

  exported
}
