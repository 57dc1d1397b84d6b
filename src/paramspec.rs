//! Declaration forms for user-supplied parameterized navigators and collectors
//! (spec §6): `define_paramspath`/`define_paramscollector` let a caller register
//! a new parameterized path element without touching the built-in library in
//! `builtins/`, the same extension-point shape as `reconcile.rs`'s small
//! `HasIdentity`/`Mergeable`/`Refinable` traits a caller implements against
//! their own type — here expressed as closures over the same protocol the
//! built-ins use, since the navigator protocol has no associated-type surface
//! for a caller to implement against.

use crate::collector::{extend_select, extend_transform};
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, ChildNavigator, Cont, Navigator, TermFn};
use crate::value::Value;

/// A user-declared parameterized navigator built from a pair of closures in
/// the `ChildNavigator` shape (extract children, rebuild from replacements).
/// `n_slots` late-bound parameter slots are reserved for it by the compiler;
/// both closures receive the navigator's compiler-assigned base `offset` so
/// they can read `frame.arg(offset, k)` for `k < n_slots`.
pub struct ParamNav<L> {
    #[allow(dead_code)]
    name: &'static str,
    n_slots: usize,
    offset: usize,
    select_impl: Box<dyn Fn(&Value<L>, &Frame<L>, usize) -> Result<Vec<Value<L>>, PathError>>,
    transform_impl: Box<dyn Fn(Value<L>, &Frame<L>, usize, Vec<Value<L>>) -> Result<Value<L>, PathError>>,
}

/// Register a new parameterized navigator: `select_impl(structure, frame, offset)`
/// returns the children this step points to; `transform_impl(structure, frame,
/// offset, new_children)` rebuilds the structure from their replacements, same
/// contract as `ChildNavigator::children`/`ChildNavigator::rebuild`.
pub fn define_paramspath<L>(
    name: &'static str,
    n_slots: usize,
    select_impl: impl Fn(&Value<L>, &Frame<L>, usize) -> Result<Vec<Value<L>>, PathError> + 'static,
    transform_impl: impl Fn(Value<L>, &Frame<L>, usize, Vec<Value<L>>) -> Result<Value<L>, PathError> + 'static,
) -> ParamNav<L> {
    ParamNav {
        name,
        n_slots,
        offset: 0,
        select_impl: Box::new(select_impl),
        transform_impl: Box::new(transform_impl),
    }
}

impl<L: Clone> ChildNavigator<L> for ParamNav<L> {
    fn children(&self, structure: &Value<L>, frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        (self.select_impl)(structure, frame, self.offset)
    }

    fn rebuild(&self, structure: Value<L>, frame: &Frame<L>, new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        (self.transform_impl)(structure, frame, self.offset, new_children)
    }

    fn slots(&self) -> usize {
        self.n_slots
    }

    fn offset_slots(&mut self, base: usize) {
        self.offset = base;
    }
}

/// A user-declared parameterized collector: like the built-in `putval`/`collect`
/// forms in `builtins/collectors.rs`, but with a caller-supplied production
/// rule instead of one of the four fixed shapes the spec names.
pub struct ParamCollector<L> {
    #[allow(dead_code)]
    name: &'static str,
    n_slots: usize,
    offset: usize,
    collect_impl: Box<dyn Fn(&Value<L>, &Frame<L>, usize) -> Result<Value<L>, PathError>>,
}

/// Register a new parameterized collector: `collect_impl(structure, frame,
/// offset)` computes the value to stash into the collected-vals side channel;
/// the cursor never moves, same contract as `collector::CollectorStep`.
pub fn define_paramscollector<L>(
    name: &'static str,
    n_slots: usize,
    collect_impl: impl Fn(&Value<L>, &Frame<L>, usize) -> Result<Value<L>, PathError> + 'static,
) -> ParamCollector<L> {
    ParamCollector {
        name,
        n_slots,
        offset: 0,
        collect_impl: Box::new(collect_impl),
    }
}

impl<L: Clone> Navigator<L> for ParamCollector<L> {
    fn slots(&self) -> usize {
        self.n_slots
    }

    fn offset_slots(&mut self, base: usize) {
        self.offset = base;
    }

    fn is_collector(&self) -> bool {
        true
    }

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        let produced = (self.collect_impl)(structure, frame, self.offset)?;
        extend_select(cont, structure, frame, vals, out, produced)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let produced = (self.collect_impl)(&structure, frame, self.offset)?;
        extend_transform(cont, structure, frame, vals, term, produced)
    }
}

// `select_from`/`transform_from` are unused directly in this module (the
// blanket `ChildNavigator` impl and `extend_select`/`extend_transform` cover
// dispatch), but re-exported here so a caller's own `select_impl`/
// `transform_impl` closures can recurse into a sub-path without a second
// `use` of `crate::navigator::*`.
pub use crate::navigator::{select_from as dispatch_select, transform_from as dispatch_transform};
