//! `filterer(path...)`: navigate into the filtered view of an ordered sequence —
//! those elements for which an inner sub-path selects at least one value.
//!
//! Transform is the interesting half: the continuation receives the filtered
//! view as a single `Value::Vec` and must return a same-length sequence, which
//! is then spliced back element-by-element into the *original* ordered
//! positions (non-matching elements pass through untouched). Modeled on
//! `map_filter_fold.rs`'s `filter_graph`, generalized from "drop or keep" to
//! "keep, recurse, splice back by position".

use crate::compiler::{select_steps, CompiledPath};
use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::{select_from, transform_from, Cont, Navigator, TermFn};
use crate::shim;
use crate::value::Value;

fn ordered_elements<L: Clone>(navigator: &str, structure: &Value<L>) -> Result<Vec<Value<L>>, PathError> {
    let len = shim::len(navigator, structure)?;
    shim::slice(navigator, structure, 0, len)
}

fn rebuild_ordered<L: Clone>(navigator: &str, structure: Value<L>, new_elements: Vec<Value<L>>) -> Result<Value<L>, PathError> {
    let len = shim::len(navigator, &structure)?;
    shim::splice(navigator, structure, 0, len, new_elements)
}

pub struct Filterer<L> {
    inner: CompiledPath<L>,
}

impl<L> Filterer<L> {
    pub fn new(inner: CompiledPath<L>) -> Self {
        Filterer { inner }
    }
}

impl<L: Clone> Navigator<L> for Filterer<L> {
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
        let elements = ordered_elements("filterer", structure)?;
        for el in &elements {
            if !select_steps(self.inner.steps(), frame, el)?.is_empty() {
                select_from(cont, el, frame, vals, out)?;
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
        let mut elements = ordered_elements("filterer", &structure)?;
        let mut matching_idx = Vec::new();
        let mut filtered = Vec::new();
        for (i, el) in elements.iter().enumerate() {
            if !select_steps(self.inner.steps(), frame, el)?.is_empty() {
                matching_idx.push(i);
                filtered.push(el.clone());
            }
        }
        let expected = filtered.len();
        let replaced = transform_from(cont, Value::Vec(filtered), frame, vals, term)?;
        let new_items = match replaced {
            Value::Vec(items) => items,
            other => vec![other],
        };
        if new_items.len() != expected {
            return Err(PathError::ArityMismatch {
                expected,
                found: new_items.len(),
            });
        }
        for (slot, idx) in matching_idx.into_iter().enumerate() {
            elements[idx] = new_items[slot].clone();
        }
        rebuild_ordered("filterer", structure, elements)
    }
}
