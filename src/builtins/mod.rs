//! The built-in navigator library (spec §4.2): constant and parameterized
//! navigators implemented directly on the protocol in `navigator.rs`, plus the
//! free functions a caller uses to build a `PathElem<L>` tree for
//! `compiler::compile_paths`.
//!
//! Each navigator lives in its own module (mirroring the one-concept-per-file
//! layout of the teacher crate's `graph/transform/*.rs`); this module just
//! re-exports the types and wires up the constructor functions callers use.

pub mod all;
pub mod cond;
pub mod collectors;
pub mod filterer;
pub mod first_last;
pub mod keypath;
pub mod multi;
pub mod predicate;
pub mod selected;
pub mod srange;
pub mod view;
pub mod walker;

use crate::compiler::{compile_paths, CompiledPath, PathElem};
use crate::navigator::{DynPred, DynXform};
use crate::value::Value;

pub use all::All;
pub use cond::{if_path as if_path_fn, if_path_else as if_path_else_fn, CondPath};
pub use collectors::{val as val_fn, Collect, CollectOne, PutVal};
pub use filterer::Filterer;
pub use first_last::{First, Last};
pub use keypath::KeyPath;
pub use multi::MultiPath;
pub use predicate::{PredicateFilter, SetMembership};
pub use selected::Selected;
pub use srange::{beginning as beginning_range, end as end_range, Bound, SRange, SRangeDynamic};
pub use view::{Transformed, View};
pub use walker::Walker;

/// Navigate into every child of a container, in iteration order.
pub fn all<L: Clone + PartialEq>() -> All {
    All
}

/// Navigate to the head element of an ordered sequence.
pub fn first<L>() -> First {
    First
}

/// Navigate to the tail element of an ordered sequence.
pub fn last<L>() -> Last {
    Last
}

/// Navigate into a map's value at a constant key.
pub fn keypath<L>(key: Value<L>) -> KeyPath<L> {
    KeyPath::constant(key)
}

/// Navigate into a map's value at a late-bound key, fetched from the parameter
/// frame at call time.
pub fn keypath_late<L>() -> KeyPath<L> {
    KeyPath::late()
}

/// Navigate into the contiguous subrange `[s, e)` of a vec/seq.
pub fn srange<L>(s: usize, e: usize) -> SRange {
    SRange { start: s, end: e }
}

/// Navigate into a subrange whose bounds are recomputed from the structure's
/// runtime length on every invocation.
pub fn srange_dynamic<L>(start: Bound, end: Bound) -> SRangeDynamic {
    SRangeDynamic { start, end }
}

/// The empty range at the start of a sequence — an insertion point for
/// prepending elements.
pub fn beginning<L>() -> SRangeDynamic {
    beginning_range()
}

/// The empty range at the end of a sequence — an insertion point for
/// appending elements.
pub fn end<L>() -> SRangeDynamic {
    end_range()
}

/// Recursively descend the value tree (pre-order, depth-first, left-to-right),
/// pointing to every sub-value for which `pred` holds.
pub fn walker<L>(pred: DynPred<L>) -> Walker<L> {
    Walker::new(pred)
}

/// Like `walker`, restricted to the syntactic-sequence interpretation of the
/// structure (vec/seq); maps and sets are opaque leaves.
pub fn codewalker<L>(pred: DynPred<L>) -> Walker<L> {
    Walker::code(pred)
}

/// Navigate into the filtered view of an ordered sequence: elements for which
/// `inner` selects at least one value.
pub fn filterer<L: Clone>(inner: CompiledPath<L>) -> Filterer<L> {
    Filterer::new(inner)
}

/// A read/write window: select applies `f` and continues; transform applies
/// `f`, continues, and returns the continuation's output directly (no
/// write-back, since `f` is not assumed invertible).
pub fn view<L>(f: DynXform<L>) -> View<L> {
    View::new(f)
}

/// A view whose window is `transform(inner, f, structure)`.
pub fn transformed<L: Clone>(inner: CompiledPath<L>, f: DynXform<L>) -> Transformed<L> {
    Transformed::new(inner, f)
}

/// Pass the structure through iff `inner` selects at least one value.
pub fn selected<L: Clone>(inner: CompiledPath<L>) -> Selected<L> {
    Selected::selected(inner)
}

/// Pass the structure through iff `inner` selects nothing.
pub fn not_selected<L: Clone>(inner: CompiledPath<L>) -> Selected<L> {
    Selected::not_selected(inner)
}

/// Scan condition/body pairs in order; continue along the first matching
/// body. An unmatched `cond_path` misses entirely (see `cond.rs`'s module doc
/// for the select/transform asymmetry this preserves from spec §9).
pub fn cond_path<L: Clone>(branches: Vec<(CompiledPath<L>, CompiledPath<L>)>) -> CondPath<L> {
    CondPath::new(branches)
}

/// `if_path(c, t)` / `if_path(c, t, e)` sugar over `cond_path`.
pub fn if_path<L>(cond: CompiledPath<L>, then: CompiledPath<L>) -> CondPath<L> {
    if_path_fn(cond, then)
}

pub fn if_path_else<L: Clone>(cond: CompiledPath<L>, then: CompiledPath<L>, els: CompiledPath<L>) -> CondPath<L> {
    if_path_else_fn(cond, then, els)
}

/// Select concatenates each branch's selections; transform threads the
/// structure through each branch's transform, left to right.
pub fn multi_path<L: Clone>(branches: Vec<CompiledPath<L>>) -> MultiPath<L> {
    MultiPath::new(branches)
}

/// `VAL`: a collector yielding the current structure.
pub fn val<L: Clone + 'static>() -> CollectorStepAlias<L> {
    val_fn()
}

/// `collector.rs`'s `CollectorStep<L>`, re-exported under the name the spec
/// uses for `VAL`'s underlying shape.
pub type CollectorStepAlias<L> = crate::collector::CollectorStep<L>;

/// `putval(v)`: a collector yielding a constant value.
pub fn putval<L>(v: Value<L>) -> PutVal<L> {
    PutVal::constant(v)
}

/// `putval` with a late-bound value, fetched from the parameter frame.
pub fn putval_late<L>() -> PutVal<L> {
    PutVal::late()
}

/// `collect(path...)`: yields `select(path, structure)` as a `Value::Vec`.
pub fn collect<L: Clone>(inner: CompiledPath<L>) -> Collect<L> {
    Collect::new(inner)
}

/// `collect_one(path...)`: like `collect`, asserting cardinality `<= 1` and
/// yielding the sole hit unwrapped.
pub fn collect_one<L: Clone>(inner: CompiledPath<L>) -> CollectOne<L> {
    CollectOne::new(inner)
}

/// A raw predicate used as a navigator directly (not lifted from a literal):
/// the structure passes through iff `pred` holds.
pub fn predicate<L>(pred: DynPred<L>) -> PredicateFilter<L> {
    PredicateFilter::new(pred)
}

/// Lift a literal `Value<L>` into the navigator it denotes, per spec §4.2's
/// last bullet and the REDESIGN FLAG in `SPEC_FULL.md` §9: a keyword/scalar is
/// `keypath(that value)`; a set acts as a membership predicate filter. Function
/// literals are intentionally not lifted here — `Value::Fn` values navigate
/// data, not paths, and a caller who wants a raw predicate as a path element
/// uses `predicate(...)` explicitly instead of relying on ambient dispatch.
impl<L: Clone + PartialEq + 'static> From<Value<L>> for PathElem<L> {
    fn from(v: Value<L>) -> Self {
        match v {
            Value::Set(members) => PathElem::step(SetMembership::new(members)),
            other => PathElem::step(KeyPath::constant(other)),
        }
    }
}

/// Build a `CompiledPath<L>` out of bare `Value<L>` literals, lifting each one
/// via `From<Value<L>> for PathElem<L>` — sugar for the common case of a path
/// made entirely of keyword lookups and set filters.
pub fn compile_literal_path<L: Clone + PartialEq + 'static>(literals: impl IntoIterator<Item = Value<L>>) -> CompiledPath<L> {
    compile_paths(literals.into_iter().map(PathElem::from))
}
