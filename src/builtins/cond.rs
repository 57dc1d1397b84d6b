//! `cond_path(c1, p1, c2, p2, ...)` / `if_path(c, t[, e])`: scan condition/body
//! pairs in order and splice the first matching body's steps in front of the
//! outer continuation. Preserves the asymmetry called out as an explicit Open
//! Question in `SPEC_FULL.md` §9: an unmatched `cond_path` yields nothing from
//! `select`, but returns the structure **unchanged, bypassing the outer
//! continuation** from `transform` (not a no-op splice — the rest of the path
//! never runs on that branch). `if_path` is sugar built from `cond_path` by
//! appending an always-true branch for the optional `else`.

use crate::compiler::{select_steps, CompiledPath};
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, Cont, Navigator, TermFn};
use crate::value::Value;

pub struct CondPath<L> {
    branches: Vec<(CompiledPath<L>, CompiledPath<L>)>,
}

impl<L> CondPath<L> {
    pub fn new(branches: Vec<(CompiledPath<L>, CompiledPath<L>)>) -> Self {
        CondPath { branches }
    }
}

/// `if_path(c, t)`: a single-branch `cond_path`; misses entirely when `c`
/// doesn't hold.
pub fn if_path<L>(cond: CompiledPath<L>, then: CompiledPath<L>) -> CondPath<L> {
    CondPath::new(vec![(cond, then)])
}

/// `if_path(c, t, e)`: a two-branch `cond_path` with an always-true fallback
/// condition (the empty compiled path — `select` on zero steps always yields
/// the structure itself, see `compiler::select_steps`).
pub fn if_path_else<L: Clone>(cond: CompiledPath<L>, then: CompiledPath<L>, els: CompiledPath<L>) -> CondPath<L> {
    let always = crate::compiler::compile_paths(std::iter::empty());
    CondPath::new(vec![(cond, then), (always, els)])
}

impl<L: Clone> Navigator<L> for CondPath<L> {
    fn slots(&self) -> usize {
        self.branches.iter().map(|(c, p)| c.slot_count() + p.slot_count()).sum()
    }

    fn offset_slots(&mut self, base: usize) {
        let mut running = base;
        for (cond, body) in &mut self.branches {
            Navigator::offset_slots(cond, running);
            running += cond.slot_count();
            Navigator::offset_slots(body, running);
            running += body.slot_count();
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
        for (cond, body) in &self.branches {
            if !select_steps(cond.steps(), frame, structure)?.is_empty() {
                let inner = Cont::chain(body.steps(), cont);
                return select_from(&inner, structure, frame, vals, out);
            }
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
        for (cond, body) in &self.branches {
            if !select_steps(cond.steps(), frame, &structure)?.is_empty() {
                let inner = Cont::chain(body.steps(), cont);
                return transform_from(&inner, structure, frame, vals, term);
            }
        }
        Ok(structure)
    }
}
