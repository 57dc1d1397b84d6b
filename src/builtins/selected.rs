//! `selected?(path...)` / `not_selected?(path...)`: gate the current structure
//! through a non-empty / empty test against an inner sub-path, the soft-failure
//! counterpart callers use instead of letting a shape mismatch propagate (spec
//! §7.2). Same pass-through-or-miss shape as `predicate.rs`'s `PredicateFilter`,
//! generalized from a closure predicate to a sub-path's selection result.

use crate::compiler::{select_steps, CompiledPath};
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::ChildNavigator;
use crate::value::Value;

pub struct Selected<L> {
    inner: CompiledPath<L>,
    /// `true` for `selected?` (pass on non-empty), `false` for `not_selected?`
    /// (pass on empty).
    want_nonempty: bool,
}

impl<L> Selected<L> {
    pub fn selected(inner: CompiledPath<L>) -> Self {
        Selected { inner, want_nonempty: true }
    }

    pub fn not_selected(inner: CompiledPath<L>) -> Self {
        Selected { inner, want_nonempty: false }
    }
}

impl<L: Clone> ChildNavigator<L> for Selected<L> {
    fn children(&self, structure: &Value<L>, frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        let hits = select_steps(self.inner.steps(), frame, structure)?;
        if hits.is_empty() != self.want_nonempty {
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

    fn slots(&self) -> usize {
        self.inner.slot_count()
    }

    fn offset_slots(&mut self, base: usize) {
        crate::navigator::Navigator::offset_slots(&mut self.inner, base);
    }
}
