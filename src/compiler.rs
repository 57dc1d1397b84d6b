//! The path compiler: flattens a tree of navigators and sub-paths into a single
//! linear `CompiledPath<L>`, assigns late-bound parameter offsets, and lifts
//! literal `Value<L>`s (keyword, set, function) into explicit navigators — the
//! REDESIGN FLAG in `SPEC_FULL.md` §9 calls this out as a tagged-union compiler
//! step rather than an open-ended runtime protocol extension.
//!
//! Styled on `pattern-core`'s `lib.rs` module-wiring: a handful of small free
//! functions and one builder type, no macro magic.

use std::rc::Rc;

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, BoxedNav, Cont, Navigator, TermFn};
use crate::value::Value;

/// One element of a user-supplied path tree: either a single navigator, or a
/// nested sub-tree to be inlined depth-first (so `compile_paths([a, [b, c], d])
/// == compile_paths([a, b, c, d])`, per spec §4.3's associativity requirement).
pub enum PathElem<L> {
    Step(BoxedNav<L>),
    Seq(Vec<PathElem<L>>),
}

impl<L> PathElem<L> {
    /// Wrap a single navigator (built-in or user-declared via `paramspec.rs`) as
    /// a one-element path tree node.
    pub fn step(nav: impl Navigator<L> + 'static) -> Self {
        PathElem::Step(Box::new(nav))
    }

    /// Inline a nested composition, e.g. the result of an earlier `compile_paths`
    /// call spliced into a larger path.
    pub fn seq(elems: impl IntoIterator<Item = PathElem<L>>) -> Self {
        PathElem::Seq(elems.into_iter().collect())
    }
}

impl<L: Clone> From<CompiledPath<L>> for PathElem<L> {
    fn from(path: CompiledPath<L>) -> Self {
        PathElem::step(path)
    }
}

fn flatten<L>(elems: Vec<PathElem<L>>, out: &mut Vec<BoxedNav<L>>) {
    for elem in elems {
        match elem {
            PathElem::Step(nav) => out.push(nav),
            PathElem::Seq(nested) => flatten(nested, out),
        }
    }
}

/// A finite ordered sequence of navigators, together with the total number of
/// late parameter slots it consumes and whether it contains any collectors. A
/// `CompiledPath<L>` is itself a `Navigator<L>` (composition is closed under the
/// protocol, per spec §3), so it can be embedded as a sub-path inside `filterer`,
/// `cond_path`, `multi_path`, `collect`, and friends.
pub struct CompiledPath<L> {
    steps: Vec<BoxedNav<L>>,
    slots: usize,
    has_collector: bool,
}

impl<L> CompiledPath<L> {
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    pub fn has_collector(&self) -> bool {
        self.has_collector
    }

    pub fn steps(&self) -> &[BoxedNav<L>] {
        &self.steps
    }
}

impl<L: Clone> Navigator<L> for CompiledPath<L> {
    fn slots(&self) -> usize {
        self.slots
    }

    fn offset_slots(&mut self, base: usize) {
        let mut running = base;
        for step in &mut self.steps {
            step.offset_slots(running);
            running += step.slots();
        }
    }

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        let inner = Cont::chain(&self.steps, cont);
        select_from(&inner, structure, frame, vals, out)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let inner = Cont::chain(&self.steps, cont);
        transform_from(&inner, structure, frame, vals, term)
    }
}

/// Flatten `elems`, lift literals (already done at `PathElem` construction time
/// via `From<Value<L>>`, see `builtins/mod.rs`), count and assign late-bound
/// parameter slot offsets left-to-right, and flag collector presence.
///
/// A path with zero slots is immediately runnable via `select`/`transform`; one
/// with `slots > 0` must first be handed to `bind_params`.
pub fn compile_paths<L: Clone>(elems: impl IntoIterator<Item = PathElem<L>>) -> CompiledPath<L> {
    let mut steps = Vec::new();
    flatten(elems.into_iter().collect(), &mut steps);

    let mut running = 0;
    let mut has_collector = false;
    for step in &mut steps {
        step.offset_slots(running);
        running += step.slots();
        has_collector |= step.is_collector();
    }

    CompiledPath {
        steps,
        slots: running,
        has_collector,
    }
}

/// A compiled path materialized against a concrete parameter array and base
/// index — the result of `bind_params`. Borrowing the compiled path and the
/// params array keeps binding allocation-free, per spec §3's lifecycle note.
pub struct BoundPath<'p, L> {
    path: &'p CompiledPath<L>,
    params: &'p [Value<L>],
    base: usize,
}

/// Materialize a late-bound path: pairs a `CompiledPath<L>` with the params
/// array and starting index its parameterized navigators will read from at
/// execution. `bind_params` performs no copying — it is a cheap reference pair.
pub fn bind_params<'p, L>(path: &'p CompiledPath<L>, params: &'p [Value<L>], start_idx: usize) -> BoundPath<'p, L> {
    BoundPath {
        path,
        params,
        base: start_idx,
    }
}

/// Anything `select`/`transform`/`select_one`/etc. can run against: a plain
/// `CompiledPath<L>` with zero slots, or a `BoundPath<L>` with its parameters
/// already supplied. Unifies the two in `engine.rs`'s entry points without
/// requiring `CompiledPath<L>` to own a `Clone`-able parameter array up front.
pub trait Executable<L> {
    fn steps(&self) -> &[BoxedNav<L>];
    fn frame(&self) -> Result<Frame<'_, L>, PathError>;
    fn has_collector(&self) -> bool;
}

impl<L> Executable<L> for CompiledPath<L> {
    fn steps(&self) -> &[BoxedNav<L>] {
        &self.steps
    }

    fn frame(&self) -> Result<Frame<'_, L>, PathError> {
        if self.slots == 0 {
            Ok(Frame::empty())
        } else {
            Err(PathError::UnboundParameter { slots: self.slots })
        }
    }

    fn has_collector(&self) -> bool {
        self.has_collector
    }
}

impl<'p, L> Executable<L> for BoundPath<'p, L> {
    fn steps(&self) -> &[BoxedNav<L>] {
        &self.path.steps
    }

    fn frame(&self) -> Result<Frame<'_, L>, PathError> {
        Ok(Frame {
            params: self.params,
            base: self.base,
        })
    }

    fn has_collector(&self) -> bool {
        self.path.has_collector
    }
}

/// Run `select(steps, structure)` with an already-resolved frame — the shared
/// helper `filterer`, `selected?`/`not_selected?`, `collect`/`collect_one`, and
/// `cond_path` all use to evaluate an embedded sub-path without going through
/// the top-level `engine::select` entry point (which would require its own
/// fresh, top-level frame rather than the enclosing one).
pub fn select_steps<L: Clone>(steps: &[BoxedNav<L>], frame: &Frame<L>, structure: &Value<L>) -> Result<Vec<Value<L>>, PathError> {
    let cont = Cont::of(steps);
    let mut out = Vec::new();
    select_from(&cont, structure, frame, &[], &mut out)?;
    Ok(out)
}

/// `Rc`-shared constant-navigator variants need no bound-params path; this
/// marker is a reminder for `paramspec.rs` that user-declared parameterized
/// navigators participate in offset assignment the same way `keypath` does.
pub type SharedPath<L> = Rc<CompiledPath<L>>;
