//! Surface sugar layered on top of the execution engine: convenience entry
//! points returning a single element, cardinality assertions, and the
//! `replace-in` wrapper that threads a secondary accumulator alongside the
//! transform (spec §1 "Out of scope (external collaborators)", §4.5, §6).
//!
//! These are thin policy wrappers over `engine::select`/`engine::transform` —
//! the same shape as `reconcile.rs`'s small functions layered over `Pattern<V>`
//! rather than new core machinery.

use std::cell::RefCell;

use crate::compiler::Executable;
use crate::engine::{select, transform};
use crate::error::PathError;
use crate::value::Value;

/// Like `select`, but errors if more than one value was found. `Ok(None)`
/// means the path pointed at nothing.
pub fn select_one<L: Clone>(path: &impl Executable<L>, structure: &Value<L>) -> Result<Option<Value<L>>, PathError> {
    let mut hits = select(path, structure)?;
    match hits.len() {
        0 => Ok(None),
        1 => Ok(Some(hits.pop().unwrap())),
        found => Err(PathError::Cardinality {
            context: "select_one".to_string(),
            expected: "<= 1".to_string(),
            found,
        }),
    }
}

/// Like `select_one`, but also errors on an empty selection — the `select-one!`
/// of the distilled spec (`!` is not a valid Rust identifier character).
pub fn select_one_exact<L: Clone>(path: &impl Executable<L>, structure: &Value<L>) -> Result<Value<L>, PathError> {
    let mut hits = select(path, structure)?;
    match hits.len() {
        1 => Ok(hits.pop().unwrap()),
        found => Err(PathError::Cardinality {
            context: "select_one_exact".to_string(),
            expected: "== 1".to_string(),
            found,
        }),
    }
}

/// The first value the path points at, or `None` if it points at nothing.
/// Unlike `select_one`, never errors on cardinality — any extra hits are
/// simply ignored.
pub fn select_first<L: Clone>(path: &impl Executable<L>, structure: &Value<L>) -> Result<Option<Value<L>>, PathError> {
    let mut hits = select(path, structure)?;
    if hits.is_empty() {
        Ok(None)
    } else {
        Ok(Some(hits.remove(0)))
    }
}

/// Fold a new side-value into the running accumulator. The default merge
/// strategy for `replace_in`: concatenation, the way a `Value::Vec` of
/// side-values grows as more are produced.
pub fn concat_merge<L>(acc: Value<L>, next: Value<L>) -> Value<L> {
    match (acc, next) {
        (Value::Vec(mut items), Value::Vec(more)) => {
            items.extend(more);
            Value::Vec(items)
        }
        (Value::Vec(mut items), other) => {
            items.push(other);
            Value::Vec(items)
        }
        (acc, next) => Value::Vec(vec![acc, next]),
    }
}

/// A thin layer over `transform`: `f` returns `Some((replacement, side_value))`
/// to drive the rewrite and optionally record a side-value, or `None` (the
/// "nullish sentinel" of spec §4.5) to leave the navigated value unchanged and
/// record nothing. `side_value`s are folded into an accumulator via `merge`
/// (pass `concat_merge` for the spec's default). Returns the rewritten
/// structure together with every recorded side-value, in visitation order.
pub fn replace_in<L: Clone>(
    path: &impl Executable<L>,
    f: impl Fn(&[Value<L>], &Value<L>) -> Option<(Value<L>, Option<Value<L>>)>,
    structure: Value<L>,
    merge: impl Fn(Value<L>, Value<L>) -> Value<L>,
) -> Result<(Value<L>, Vec<Value<L>>), PathError> {
    let acc = RefCell::new(Value::Vec(Vec::new()));
    let new_structure = transform(
        path,
        |vals, x| match f(vals, &x) {
            Some((replacement, Some(side_value))) => {
                let mut slot = acc.borrow_mut();
                let current = std::mem::replace(&mut *slot, Value::Vec(Vec::new()));
                *slot = merge(current, side_value);
                Ok(replacement)
            }
            Some((replacement, None)) => Ok(replacement),
            None => Ok(x),
        },
        structure,
    )?;
    let side_values = match acc.into_inner() {
        Value::Vec(items) => items,
        other => vec![other],
    };
    Ok((new_structure, side_values))
}
