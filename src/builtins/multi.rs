//! `multi_path(p1, ..., pn)`: select concatenates each branch's selections over
//! the same structure; transform threads the structure through each branch's
//! transform in order, so a later branch observes an earlier branch's writes
//! (spec §4.2). Unlike `cond_path`, every branch runs — this is a fan-out/fold,
//! not a first-match dispatch.

use crate::compiler::CompiledPath;
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, Cont, Navigator, TermFn};
use crate::value::Value;

pub struct MultiPath<L> {
    branches: Vec<CompiledPath<L>>,
}

impl<L> MultiPath<L> {
    pub fn new(branches: Vec<CompiledPath<L>>) -> Self {
        MultiPath { branches }
    }
}

impl<L: Clone> Navigator<L> for MultiPath<L> {
    fn slots(&self) -> usize {
        self.branches.iter().map(|b| b.slot_count()).sum()
    }

    fn offset_slots(&mut self, base: usize) {
        let mut running = base;
        for branch in &mut self.branches {
            Navigator::offset_slots(branch, running);
            running += branch.slot_count();
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
        for branch in &self.branches {
            let inner = Cont::chain(branch.steps(), cont);
            select_from(&inner, structure, frame, vals, out)?;
        }
        Ok(())
    }

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError> {
        let mut current = structure;
        for branch in &self.branches {
            let inner = Cont::chain(branch.steps(), cont);
            current = transform_from(&inner, current, frame, vals, term)?;
        }
        Ok(current)
    }
}
