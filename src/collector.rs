//! Collectors: path steps that stash a value onto the side channel (`vals`)
//! without moving the navigation cursor. Modeled on the teacher crate's
//! `comonad.rs` `extend`, which likewise produces a value alongside a structure
//! without consuming or replacing the structure itself.
//!
//! The four collector forms (`val`, `putval`, `collect`, `collect_one`, see
//! `builtins/collectors.rs`) all reduce to "compute a value from the current
//! structure and frame, append it to `vals`, keep going" — this module holds
//! that one shared shape.

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, Cont, Navigator, TermFn};
use crate::value::Value;

/// A collector step: `produce` computes the value to stash from the current
/// structure and parameter frame; the cursor itself passes through unchanged.
/// `produce` is fallible so that `collect_one`'s cardinality check (and any
/// other collector built over a sub-path) can surface a `PathError`.
pub struct CollectorStep<L> {
    slots: usize,
    produce: Box<dyn Fn(&Value<L>, &Frame<L>) -> Result<Value<L>, PathError>>,
}

impl<L> CollectorStep<L> {
    pub fn new(slots: usize, produce: impl Fn(&Value<L>, &Frame<L>) -> Result<Value<L>, PathError> + 'static) -> Self {
        CollectorStep { slots, produce: Box::new(produce) }
    }

    /// Convenience constructor for a collector that cannot fail.
    pub fn infallible(slots: usize, produce: impl Fn(&Value<L>, &Frame<L>) -> Value<L> + 'static) -> Self {
        CollectorStep::new(slots, move |s, f| Ok(produce(s, f)))
    }
}

/// Append `produced` to `vals` and continue the select chain. The shared half
/// of every collector's behavior, factored out so parameterized collectors
/// that need their own `offset_slots` (`PutVal`, `Collect`, `CollectOne` in
/// `builtins/collectors.rs`) can implement `Navigator<L>` directly — a value
/// captured inside a `CollectorStep`'s boxed closure can't be re-based by the
/// compiler's offset-assignment pass after the fact, but a struct field can.
pub fn extend_select<L: Clone>(
    cont: &Cont<L>,
    structure: &Value<L>,
    frame: &Frame<L>,
    vals: &[Value<L>],
    out: &mut Vec<Value<L>>,
    produced: Value<L>,
) -> Result<(), PathError> {
    let mut extended = vals.to_vec();
    extended.push(produced);
    select_from(cont, structure, frame, &extended, out)
}

/// `transform`-side counterpart of `extend_select`.
pub fn extend_transform<L: Clone>(
    cont: &Cont<L>,
    structure: Value<L>,
    frame: &Frame<L>,
    vals: &[Value<L>],
    term: &TermFn<L>,
    produced: Value<L>,
) -> Result<Value<L>, PathError> {
    let mut extended = vals.to_vec();
    extended.push(produced);
    transform_from(cont, structure, frame, &extended, term)
}

impl<L: Clone> Navigator<L> for CollectorStep<L> {
    fn slots(&self) -> usize {
        self.slots
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
        let mut extended = vals.to_vec();
        extended.push((self.produce)(structure, frame)?);
        select_from(cont, structure, frame, &extended, out)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let mut extended = vals.to_vec();
        extended.push((self.produce)(&structure, frame)?);
        transform_from(cont, structure, frame, &extended, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::BoxedNav;
    use crate::value::Scalar;

    #[test]
    fn collector_appends_without_moving_cursor() {
        let steps: Vec<BoxedNav<Scalar>> =
            vec![Box::new(CollectorStep::infallible(0, |structure: &Value<Scalar>, _frame| structure.clone()))];
        let cont = Cont::of(&steps);
        let structure = Value::int(42);
        let frame = Frame::empty();
        let mut out = Vec::new();
        select_from(&cont, &structure, &frame, &[], &mut out).unwrap();
        // The cursor (structure) passed through untouched, once.
        assert_eq!(out, vec![Value::int(42)]);
    }

    #[test]
    fn collector_prefixes_vals_seen_by_terminal_handler() {
        let steps: Vec<BoxedNav<Scalar>> =
            vec![Box::new(CollectorStep::infallible(0, |structure: &Value<Scalar>, _frame| structure.clone()))];
        let cont = Cont::of(&steps);
        let structure = Value::int(7);
        let frame = Frame::empty();
        let term: &TermFn<Scalar> = &|vals, structure| {
            assert_eq!(vals, &[Value::int(7)]);
            Ok(structure)
        };
        transform_from(&cont, structure, &frame, &[], term).unwrap();
    }
}
