//! Container Shim: a thin abstraction over the four container shapes the engine
//! recognizes, so the built-in navigators in `builtins/` don't each re-derive how
//! to "get the first element" or "put a value back" per shape.
//!
//! This plays the same role for container shapes that the teacher crate's
//! `GraphQuery<V>` (`graph/graph_query.rs`) plays for backing graph
//! representations: a small, fixed set of operations that algorithms are written
//! against, instead of against the concrete representation.

use crate::error::PathError;
use crate::value::{OrderedMap, Value};

fn shape_name<L>(v: &Value<L>) -> &'static str {
    match v {
        Value::Scalar(_) => "scalar",
        Value::Map(_) => "map",
        Value::Vec(_) => "vec",
        Value::Seq(_) => "seq",
        Value::Set(_) => "set",
        Value::Fn(_) => "fn",
    }
}

/// Returns every child of a container, in iteration order. Map children are
/// `Value::Vec([key, value])` pairs (see DESIGN.md for why).
pub fn children<L: Clone + PartialEq>(navigator: &str, v: &Value<L>) -> Result<Vec<Value<L>>, PathError> {
    match v {
        Value::Map(m) => Ok(m
            .0
            .iter()
            .map(|(k, val)| Value::Vec(vec![k.clone(), val.clone()]))
            .collect()),
        Value::Vec(items) => Ok(items.clone()),
        Value::Seq(items) => Ok(items.iter().cloned().collect()),
        Value::Set(items) => Ok(items.clone()),
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// Rebuilds a container of the same shape as `original` from a replacement list
/// of the same length and order as `children` would have returned.
pub fn rebuild<L: Clone + PartialEq>(
    navigator: &str,
    original: &Value<L>,
    new_children: Vec<Value<L>>,
) -> Result<Value<L>, PathError> {
    match original {
        Value::Map(_) => {
            let mut m = OrderedMap::new();
            for child in new_children {
                match child {
                    Value::Vec(mut pair) if pair.len() == 2 => {
                        let value = pair.pop().unwrap();
                        let key = pair.pop().unwrap();
                        m.put(key, value);
                    }
                    _ => {
                        return Err(PathError::shape_mismatch(
                            navigator,
                            "a non-pair replacement for a map entry",
                        ))
                    }
                }
            }
            Ok(Value::Map(m))
        }
        Value::Vec(_) => Ok(Value::Vec(new_children)),
        Value::Seq(_) => Ok(Value::Seq(new_children.into_iter().collect())),
        Value::Set(_) => Ok(Value::Set(new_children)),
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// The head element of an ordered sequence (vec or seq).
pub fn first<L: Clone>(navigator: &str, v: &Value<L>) -> Result<Value<L>, PathError> {
    match v {
        Value::Vec(items) => items
            .first()
            .cloned()
            .ok_or_else(|| PathError::shape_mismatch(navigator, "empty vec")),
        Value::Seq(items) => items
            .front()
            .cloned()
            .ok_or_else(|| PathError::shape_mismatch(navigator, "empty seq")),
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// The tail element of an ordered sequence (vec or seq).
pub fn last<L: Clone>(navigator: &str, v: &Value<L>) -> Result<Value<L>, PathError> {
    match v {
        Value::Vec(items) => items
            .last()
            .cloned()
            .ok_or_else(|| PathError::shape_mismatch(navigator, "empty vec")),
        Value::Seq(items) => items
            .back()
            .cloned()
            .ok_or_else(|| PathError::shape_mismatch(navigator, "empty seq")),
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// Replace the head element of an ordered sequence, preserving the rest.
pub fn update_first<L: Clone>(navigator: &str, v: Value<L>, new_first: Value<L>) -> Result<Value<L>, PathError> {
    match v {
        Value::Vec(mut items) => {
            if items.is_empty() {
                return Err(PathError::shape_mismatch(navigator, "empty vec"));
            }
            items[0] = new_first;
            Ok(Value::Vec(items))
        }
        Value::Seq(mut items) => {
            if items.is_empty() {
                return Err(PathError::shape_mismatch(navigator, "empty seq"));
            }
            items[0] = new_first;
            Ok(Value::Seq(items))
        }
        other => Err(PathError::shape_mismatch(navigator, shape_name(&other))),
    }
}

/// Replace the tail element of an ordered sequence, preserving the rest.
pub fn update_last<L: Clone>(navigator: &str, v: Value<L>, new_last: Value<L>) -> Result<Value<L>, PathError> {
    match v {
        Value::Vec(mut items) => {
            let idx = items
                .len()
                .checked_sub(1)
                .ok_or_else(|| PathError::shape_mismatch(navigator, "empty vec"))?;
            items[idx] = new_last;
            Ok(Value::Vec(items))
        }
        Value::Seq(mut items) => {
            if items.is_empty() {
                return Err(PathError::shape_mismatch(navigator, "empty seq"));
            }
            let idx = items.len() - 1;
            items[idx] = new_last;
            Ok(Value::Seq(items))
        }
        other => Err(PathError::shape_mismatch(navigator, shape_name(&other))),
    }
}

/// The length of an ordered sequence, used by `srange_dynamic`'s `END` bound.
pub fn len<L>(navigator: &str, v: &Value<L>) -> Result<usize, PathError> {
    match v {
        Value::Vec(items) => Ok(items.len()),
        Value::Seq(items) => Ok(items.len()),
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// The contiguous subsequence `[s, e)` of a vec/seq, as a fresh `Value::Vec`.
pub fn slice<L: Clone>(navigator: &str, v: &Value<L>, s: usize, e: usize) -> Result<Vec<Value<L>>, PathError> {
    match v {
        Value::Vec(items) => {
            let e = e.min(items.len());
            let s = s.min(e);
            Ok(items[s..e].to_vec())
        }
        Value::Seq(items) => {
            let e = e.min(items.len());
            let s = s.min(e);
            Ok(items.iter().skip(s).take(e - s).cloned().collect())
        }
        other => Err(PathError::shape_mismatch(navigator, shape_name(other))),
    }
}

/// Replace the `[s, e)` subrange of a vec/seq with `replacement`, splicing it in.
pub fn splice<L: Clone>(
    navigator: &str,
    v: Value<L>,
    s: usize,
    e: usize,
    replacement: Vec<Value<L>>,
) -> Result<Value<L>, PathError> {
    match v {
        Value::Vec(mut items) => {
            let e = e.min(items.len());
            let s = s.min(e);
            items.splice(s..e, replacement);
            Ok(Value::Vec(items))
        }
        Value::Seq(items) => {
            let mut items: Vec<_> = items.into_iter().collect();
            let e = e.min(items.len());
            let s = s.min(e);
            items.splice(s..e, replacement);
            Ok(Value::Seq(items.into_iter().collect()))
        }
        other => Err(PathError::shape_mismatch(navigator, shape_name(&other))),
    }
}
