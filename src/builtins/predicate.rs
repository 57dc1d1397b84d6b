//! Predicate-gated pass-through navigators: the compiler's literal-lifting targets
//! for a `Value::Set` literal (membership test) or a raw predicate closure, per
//! the REDESIGN FLAG in the distilled spec (`SPEC_FULL.md` §9) — these are lifted
//! into explicit tagged navigators by the compiler rather than dispatched on an
//! open-ended "is this navigator-like" trait at runtime.
//!
//! Both forms share one shape: the structure passes through unchanged iff a
//! predicate holds, otherwise the path misses entirely (select yields nothing;
//! transform is a no-op).

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{DynPred, ChildNavigator};
use crate::value::Value;

pub struct PredicateFilter<L> {
    pred: DynPred<L>,
}

impl<L> PredicateFilter<L> {
    pub fn new(pred: DynPred<L>) -> Self {
        PredicateFilter { pred }
    }
}

impl<L: Clone> ChildNavigator<L> for PredicateFilter<L> {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        if (self.pred)(structure) {
            Ok(vec![structure.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        match new_children.pop() {
            Some(replacement) => Ok(replacement),
            None => Ok(structure),
        }
    }
}

/// `SetLiteral` lifting: the structure passes through iff it is `==` to one of
/// the set's elements.
pub struct SetMembership<L: PartialEq> {
    members: Vec<Value<L>>,
}

impl<L: PartialEq> SetMembership<L> {
    pub fn new(members: Vec<Value<L>>) -> Self {
        SetMembership { members }
    }
}

impl<L: Clone + PartialEq> ChildNavigator<L> for SetMembership<L> {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        if self.members.iter().any(|m| m == structure) {
            Ok(vec![structure.clone()])
        } else {
            Ok(Vec::new())
        }
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        match new_children.pop() {
            Some(replacement) => Ok(replacement),
            None => Ok(structure),
        }
    }
}
