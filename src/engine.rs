//! Execution Engine: the top-level entry points that run a compiled path
//! against a structure in select or transform mode (spec §4.4, §6).
//!
//! Styled on `pattern-core`'s `graph_query.rs` top-level combinator functions
//! (`frame_query`, `memoize_incident_rels`): small, docs-heavy free functions
//! over the core types, not a struct with an inherent-method surface.

use crate::compiler::{select_steps, Executable};
use crate::error::PathError;
use crate::navigator::{transform_from, Cont, TermFn};
use crate::value::Value;

/// Collect every value the path points at, in deterministic left-to-right
/// depth-first order.
pub fn select<L: Clone>(path: &impl Executable<L>, structure: &Value<L>) -> Result<Vec<Value<L>>, PathError> {
    let frame = path.frame()?;
    select_steps(path.steps(), &frame, structure)
}

/// Rebuild `structure` with every pointed-at value replaced by `f`'s output.
/// `f` receives the accumulated collected-vals slice (empty if the path has no
/// collectors) followed by the navigated value, per spec §4.4.
pub fn transform<L: Clone>(
    path: &impl Executable<L>,
    f: impl Fn(&[Value<L>], Value<L>) -> Result<Value<L>, PathError>,
    structure: Value<L>,
) -> Result<Value<L>, PathError> {
    let frame = path.frame()?;
    let cont = Cont::of(path.steps());
    let term: &TermFn<L> = &f;
    transform_from(&cont, structure, &frame, &[], term)
}

/// Shorthand for `transform(path, |_, _| Ok(v.clone()), structure)`: every
/// pointed-at position becomes `v`.
pub fn setval<L: Clone>(path: &impl Executable<L>, v: Value<L>, structure: Value<L>) -> Result<Value<L>, PathError> {
    transform(path, move |_vals, _x| Ok(v.clone()), structure)
}
