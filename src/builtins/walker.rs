//! `walker`/`codewalker`: recursive pre-order, depth-first, left-to-right descent
//! into the value tree, pointing to every sub-value a predicate accepts.
//!
//! Unlike the `ChildNavigator` built-ins (`ALL`, `FIRST`/`LAST`, `srange`), a
//! walker's "children" depend on whether the *current* node already matched —
//! a match stops descent on that branch and hands off to the continuation,
//! a miss recurses into the node's own children and rebuilds bottom-up. That
//! two-way branch doesn't fit the single `children`/`rebuild` pair, so `Walker`
//! implements `Navigator<L>` directly, in the recursion-scheme style of
//! `unfold_graph.rs`/`para.rs` (unfold to find matches, fold back up to rebuild).

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, Cont, DynPred, Navigator, TermFn};
use crate::shim;
use crate::value::Value;

/// Which containers a walker is willing to recurse into when the current node
/// doesn't match. `Walker` uses `AnyContainer` (map/vec/seq/set); `codewalker`
/// uses `SequenceOnly` (vec/seq — the "syntactic-sequence interpretation" of
/// spec §4.2, treating maps and sets as opaque leaves).
#[derive(Clone, Copy, PartialEq, Eq)]
enum Domain {
    AnyContainer,
    SequenceOnly,
}

impl Domain {
    fn children<L: Clone + PartialEq>(self, v: &Value<L>) -> Option<Vec<Value<L>>> {
        match self {
            Domain::AnyContainer => shim::children("walker", v).ok(),
            Domain::SequenceOnly => match v {
                Value::Vec(_) | Value::Seq(_) => shim::children("codewalker", v).ok(),
                _ => None,
            },
        }
    }

    fn rebuild<L: Clone + PartialEq>(self, original: &Value<L>, new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        let name = match self {
            Domain::AnyContainer => "walker",
            Domain::SequenceOnly => "codewalker",
        };
        shim::rebuild(name, original, new_children)
    }
}

pub struct Walker<L> {
    pred: DynPred<L>,
    domain: Domain,
}

impl<L> Walker<L> {
    pub fn new(pred: DynPred<L>) -> Self {
        Walker { pred, domain: Domain::AnyContainer }
    }

    pub fn code(pred: DynPred<L>) -> Self {
        Walker { pred, domain: Domain::SequenceOnly }
    }
}

impl<L: Clone + PartialEq> Navigator<L> for Walker<L> {
    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        self.walk_select(cont, structure, frame, vals, out)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        self.walk_transform(cont, structure, frame, vals, term)
    }
}

impl<L: Clone + PartialEq> Walker<L> {
    fn walk_select(
        &self,
        cont: &Cont<L>,
        node: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        if (self.pred)(node) {
            return select_from(cont, node, frame, vals, out);
        }
        if let Some(kids) = self.domain.children(node) {
            for kid in &kids {
                self.walk_select(cont, kid, frame, vals, out)?;
            }
        }
        // A non-matching leaf (or opaque container under `codewalker`) simply
        // contributes nothing to the selection.
        Ok(())
    }

    fn walk_transform(
        &self,
        cont: &Cont<L>,
        node: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        if (self.pred)(&node) {
            return transform_from(cont, node, frame, vals, term);
        }
        match self.domain.children(&node) {
            Some(kids) => {
                let mut new_kids = Vec::with_capacity(kids.len());
                for kid in kids {
                    new_kids.push(self.walk_transform(cont, kid, frame, vals, term)?);
                }
                self.domain.rebuild(&node, new_kids)
            }
            None => Ok(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::{BoxedNav, Cont as ContT};
    use crate::value::Scalar;
    use std::rc::Rc;

    fn is_even(v: &Value<Scalar>) -> bool {
        matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 == 0)
    }

    #[test]
    fn walker_finds_nested_matches_in_preorder() {
        let pred: DynPred<Scalar> = Rc::new(is_even);
        let steps: Vec<BoxedNav<Scalar>> = vec![Box::new(Walker::new(pred))];
        let cont = ContT::of(&steps);
        let structure = Value::vec([Value::int(1), Value::vec([Value::int(2), Value::int(3), Value::int(4)])]);
        let frame = Frame::empty();
        let mut out = Vec::new();
        select_from(&cont, &structure, &frame, &[], &mut out).unwrap();
        assert_eq!(out, vec![Value::int(2), Value::int(4)]);
    }

    #[test]
    fn walker_transform_rebuilds_bottom_up() {
        let pred: DynPred<Scalar> = Rc::new(is_even);
        let steps: Vec<BoxedNav<Scalar>> = vec![Box::new(Walker::new(pred))];
        let cont = ContT::of(&steps);
        let structure = Value::vec([Value::int(1), Value::vec([Value::int(2), Value::int(3)])]);
        let frame = Frame::empty();
        let term: &TermFn<Scalar> = &|_vals, v| match v {
            Value::Scalar(Scalar::Int(i)) => Ok(Value::int(i * 10)),
            other => Ok(other),
        };
        let result = transform_from(&cont, structure, &frame, &[], term).unwrap();
        assert_eq!(result, Value::vec([Value::int(1), Value::vec([Value::int(20), Value::int(3)])]));
    }

    #[test]
    fn codewalker_treats_maps_as_opaque_leaves() {
        use crate::value::OrderedMap;
        let pred: DynPred<Scalar> = Rc::new(is_even);
        let steps: Vec<BoxedNav<Scalar>> = vec![Box::new(Walker::code(pred))];
        let cont = ContT::of(&steps);
        let mut m = OrderedMap::new();
        m.put(Value::keyword("a"), Value::int(2));
        let structure = Value::vec([Value::Map(m)]);
        let frame = Frame::empty();
        let mut out = Vec::new();
        select_from(&cont, &structure, &frame, &[], &mut out).unwrap();
        assert!(out.is_empty(), "codewalker must not descend into a map");
    }
}
