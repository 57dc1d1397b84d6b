//! `view(f)`/`transformed(path, f)`: read/write windows onto a computed value.
//!
//! Both apply a (possibly path-derived) transform to produce the value the
//! continuation navigates into, then hand back *whatever the continuation
//! produced* as the new value at this position — there is no write-back into
//! the original structure, because `f` is not assumed invertible (spec §4.2).
//! That "compute a single child, discard the original on rebuild" shape is
//! exactly `ChildNavigator`'s contract with a no-op `rebuild`.

use crate::compiler::CompiledPath;
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{transform_from, ChildNavigator, Cont, DynXform, Navigator, TermFn};
use crate::value::Value;

pub struct View<L> {
    f: DynXform<L>,
}

impl<L> View<L> {
    pub fn new(f: DynXform<L>) -> Self {
        View { f }
    }
}

impl<L: Clone> ChildNavigator<L> for View<L> {
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        Ok(vec![(self.f)(structure)])
    }

    fn rebuild(&self, _structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        new_children
            .pop()
            .ok_or_else(|| PathError::shape_mismatch("view", "no replacement produced"))
    }
}

/// `transformed(path, f)`: the window is `transform(path, f, structure)` — run
/// once per visit, same window used for both select and transform.
pub struct Transformed<L> {
    inner: CompiledPath<L>,
    f: DynXform<L>,
}

impl<L> Transformed<L> {
    pub fn new(inner: CompiledPath<L>, f: DynXform<L>) -> Self {
        Transformed { inner, f }
    }
}

impl<L: Clone> Navigator<L> for Transformed<L> {
    fn slots(&self) -> usize {
        self.inner.slot_count()
    }

    fn offset_slots(&mut self, base: usize) {
        Navigator::offset_slots(&mut self.inner, base);
    }

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        let window = self.window(structure, frame)?;
        crate::navigator::select_from(cont, &window, frame, vals, out)
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let window = self.window(&structure, frame)?;
        transform_from(cont, window, frame, vals, term)
    }
}

impl<L: Clone> Transformed<L> {
    fn window(&self, structure: &Value<L>, frame: &Frame<L>) -> Result<Value<L>, PathError> {
        let f = self.f.clone();
        let term: &TermFn<L> = &move |_vals, x| Ok(f(&x));
        let cont = Cont::of(self.inner.steps());
        transform_from(&cont, structure.clone(), frame, &[], term)
    }
}
