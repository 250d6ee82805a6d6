//! rulegraph: target resolution and rule-data aggregation.
//!
//! This crate is the piece of the build system that turns symbolic target
//! identifiers into resolved rule objects and gathers the auxiliary data
//! incremental builds need:
//!
//! - [`resolve::resolve_targets`]: strict or lenient target-to-rule
//!   resolution against a [`registry::RuleRegistry`]
//! - [`inputs::collect_inputs`]: folding a directory subtree's files into
//!   an ordered accumulator for cache-key purposes
//! - [`resolve::matches_target`]: an identity predicate over rules
//! - [`exports::collect_exported`]: one non-transitive pass unioning the
//!   dependencies re-exported by capable rules
//!
//! Graph construction, cycle detection, scheduling, and cache-key
//! computation live in other layers; this crate only supplies the rule and
//! input sets those layers consume. Every result set is deterministically
//! ordered, independent of input order or duplication.

pub mod exports;
pub mod inputs;
pub mod registry;
pub mod resolve;
pub mod rule;
pub mod target;
pub mod traverse;

pub use exports::collect_exported;
pub use inputs::{PathSet, TraversalError, collect_inputs};
pub use registry::{InMemoryRegistry, RuleRegistry};
pub use resolve::{MissingRuleError, matches_target, resolve_targets};
pub use rule::{BasicRule, ExportDependencies, ExportingRule, Rule, RuleRef, RuleSet};
pub use target::{BuildTarget, TargetParseError};
pub use traverse::{DirectoryTraverser, WalkDirTraverser};
