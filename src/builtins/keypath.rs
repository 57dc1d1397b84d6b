//! `keypath`: navigate into a map's value at a (possibly late-bound) key.

use crate::error::PathError;
use crate::frame::{Arg, Frame};
use crate::navigator::{select_from, transform_from, Cont, Navigator, TermFn};
use crate::value::Value;

pub struct KeyPath<L> {
    pub key: Arg<L>,
}

impl<L> KeyPath<L> {
    pub fn constant(key: Value<L>) -> Self {
        KeyPath { key: Arg::Const(key) }
    }

    pub fn late() -> Self {
        KeyPath { key: Arg::late_placeholder() }
    }
}

// Not a `ChildNavigator`: select must miss on an absent key (there is nothing
// to select) while transform must *create* the entry on an absent key (spec
// §4.2), so the two operations diverge in a way `ChildNavigator`'s single
// `children`/`rebuild` pair can't express. `Navigator<L>` is implemented
// directly instead.
impl<L: Clone + PartialEq> Navigator<L> for KeyPath<L> {
    fn slots(&self) -> usize {
        self.key.slots()
    }

    fn offset_slots(&mut self, base: usize) {
        self.key.assign_offset(base);
    }

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        match structure {
            Value::Map(m) => {
                let key = self.key.resolve(frame);
                match m.get(&key) {
                    Some(value) => select_from(cont, value, frame, vals, out),
                    None => Ok(()),
                }
            }
            _ => Err(PathError::shape_mismatch("keypath", "non-map")),
        }
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        match structure {
            Value::Map(mut m) => {
                let key = self.key.resolve(frame);
                let current = m.get(&key).cloned();
                let replaced = match current {
                    Some(v) => transform_from(cont, v, frame, vals, term)?,
                    // No current value to hand the continuation; an empty map
                    // is the closest "nothing here yet" placeholder the value
                    // model has (see DESIGN.md). Most continuations at this
                    // position are a terminal transform that ignores its input
                    // (`setval`) or a user function driven by collected-vals.
                    None => transform_from(cont, Value::Map(Default::default()), frame, vals, term)?,
                };
                m.put(key, replaced);
                Ok(Value::Map(m))
            }
            _ => Err(PathError::shape_mismatch("keypath", "non-map")),
        }
    }
}
