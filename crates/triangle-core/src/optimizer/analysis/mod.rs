//! Syntactic analyses used by the optimiser
//!
//! All of them are visitors over the node families in [`crate::ast::visitor`]
//! and work at the granularity of base identifiers: a write to `a[i]` or
//! `a.f` counts as a write to `a`.

mod assigned;
mod free_vars;
mod literal_counter;
mod purity;

pub use assigned::{base_identifier, collect_assigned, AssignedVariableCollector, BaseIdentifier};
pub use free_vars::{free_vars, is_invariant, FreeVariableCollector};
pub use literal_counter::{LiteralCounter, LiteralStats};
pub use purity::{is_pure, PurityCheck};

use rustc_hash::FxHashSet;

/// Set of variable names, keyed by spelling
pub type NameSet<'a> = FxHashSet<&'a str>;
