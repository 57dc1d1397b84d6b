//! `VAL`, `putval(v)`, `collect(path...)`, `collect_one(path...)`: the four
//! collector forms of spec §4.4 — a navigator-shaped step that stashes a value
//! into the side channel without moving the cursor. `VAL` needs no parameters
//! so it rides the generic `CollectorStep` from `collector.rs`; the other three
//! carry an `Arg<L>` or embedded `CompiledPath<L>` that the compiler's
//! offset-assignment pass must be able to re-base, so they implement
//! `Navigator<L>` directly instead of going through a boxed closure.

use crate::collector::{extend_select, extend_transform, CollectorStep};
use crate::compiler::{select_steps, CompiledPath};
use crate::error::PathError;
use crate::frame::{Arg, Frame};
use crate::navigator::{Cont, Navigator, TermFn};
use crate::value::Value;

/// `VAL`: yields the current structure unchanged.
pub fn val<L: Clone + 'static>() -> CollectorStep<L> {
    CollectorStep::infallible(0, |structure: &Value<L>, _frame| structure.clone())
}

/// `putval(v)`: yields a constant, or a late-bound value fetched from the
/// parameter frame at call time.
pub struct PutVal<L> {
    value: Arg<L>,
}

impl<L> PutVal<L> {
    pub fn constant(value: Value<L>) -> Self {
        PutVal { value: Arg::Const(value) }
    }

    pub fn late() -> Self {
        PutVal { value: Arg::late_placeholder() }
    }
}

impl<L: Clone> Navigator<L> for PutVal<L> {
    fn slots(&self) -> usize {
        self.value.slots()
    }

    fn offset_slots(&mut self, base: usize) {
        self.value.assign_offset(base);
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
        extend_select(cont, structure, frame, vals, out, self.value.resolve(frame))
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let v = self.value.resolve(frame);
        extend_transform(cont, structure, frame, vals, term, v)
    }
}

/// `collect(path...)`: yields `select(path, structure)` as a `Value::Vec`.
pub struct Collect<L> {
    inner: CompiledPath<L>,
}

impl<L> Collect<L> {
    pub fn new(inner: CompiledPath<L>) -> Self {
        Collect { inner }
    }
}

impl<L: Clone> Navigator<L> for Collect<L> {
    fn slots(&self) -> usize {
        self.inner.slot_count()
    }

    fn offset_slots(&mut self, base: usize) {
        Navigator::offset_slots(&mut self.inner, base);
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
        let hits = select_steps(self.inner.steps(), frame, structure)?;
        extend_select(cont, structure, frame, vals, out, Value::Vec(hits))
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let hits = select_steps(self.inner.steps(), frame, &structure)?;
        extend_transform(cont, structure, frame, vals, term, Value::Vec(hits))
    }
}

/// `collect_one(path...)`: like `collect`, but asserts the inner selection has
/// at most one element and yields it unwrapped (an empty selection yields an
/// empty `Value::Vec` — the value model has no dedicated absent/nil leaf, see
/// `DESIGN.md`).
pub struct CollectOne<L> {
    inner: CompiledPath<L>,
}

impl<L> CollectOne<L> {
    pub fn new(inner: CompiledPath<L>) -> Self {
        CollectOne { inner }
    }
}

impl<L: Clone> CollectOne<L> {
    fn one(&self, frame: &Frame<L>, structure: &Value<L>) -> Result<Value<L>, PathError> {
        let mut hits = select_steps(self.inner.steps(), frame, structure)?;
        match hits.len() {
            0 => Ok(Value::Vec(Vec::new())),
            1 => Ok(hits.pop().unwrap()),
            found => Err(PathError::Cardinality {
                context: "collect_one".to_string(),
                expected: "<= 1".to_string(),
                found,
            }),
        }
    }
}

impl<L: Clone> Navigator<L> for CollectOne<L> {
    fn slots(&self) -> usize {
        self.inner.slot_count()
    }

    fn offset_slots(&mut self, base: usize) {
        Navigator::offset_slots(&mut self.inner, base);
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
        let v = self.one(frame, structure)?;
        extend_select(cont, structure, frame, vals, out, v)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let v = self.one(frame, &structure)?;
        extend_transform(cont, structure, frame, vals, term, v)
    }
}
