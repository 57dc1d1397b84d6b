//! `srange`/`srange_dynamic`: navigate into a contiguous subrange `[start, end)`
//! of an ordered sequence, either by fixed indices or by indices computed
//! relative to the sequence's runtime length (`beginning()`/`end()`).

use crate::error::PathError;
use crate::frame::Frame;
use crate::navigator::ChildNavigator;
use crate::shim;
use crate::value::Value;

pub struct SRange {
    pub start: usize,
    pub end: usize,
}

impl<L: Clone> ChildNavigator<L> for SRange {
    // The whole subrange is navigated to as a single child (a `Value::Vec` of
    // its elements), not one child per element — the rest of the path sees and
    // replaces the subrange as one sequence, same as `keypath`'s single value.
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        Ok(vec![Value::Vec(shim::slice("srange", structure, self.start, self.end)?)])
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        let replacement = match new_children.pop() {
            Some(Value::Vec(items)) => items,
            Some(other) => vec![other],
            None => Vec::new(),
        };
        shim::splice("srange", structure, self.start, self.end, replacement)
    }
}

/// One endpoint of a dynamic range: either a fixed index, or an offset counted
/// back from the sequence's length at runtime (`FromEnd(0)` is the length itself).
#[derive(Clone, Copy)]
pub enum Bound {
    Fixed(usize),
    FromEnd(usize),
}

impl Bound {
    fn resolve(&self, len: usize) -> usize {
        match self {
            Bound::Fixed(i) => *i,
            Bound::FromEnd(k) => len.saturating_sub(*k),
        }
    }
}

pub struct SRangeDynamic {
    pub start: Bound,
    pub end: Bound,
}

impl<L: Clone> ChildNavigator<L> for SRangeDynamic {
    // Same single-child convention as `SRange` above: the continuation sees the
    // whole subrange as one `Value::Vec`, recomputed from the structure's
    // current length on every invocation (the "dynamic" part).
    fn children(&self, structure: &Value<L>, _frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError> {
        let len = shim::len("srange", structure)?;
        Ok(vec![Value::Vec(shim::slice(
            "srange",
            structure,
            self.start.resolve(len),
            self.end.resolve(len),
        )?)])
    }

    fn rebuild(&self, structure: Value<L>, _frame: &Frame<L>, mut new_children: Vec<Value<L>>) -> Result<Value<L>, PathError> {
        let replacement = match new_children.pop() {
            Some(Value::Vec(items)) => items,
            Some(other) => vec![other],
            None => Vec::new(),
        };
        let len = shim::len("srange", &structure)?;
        let (s, e) = (self.start.resolve(len), self.end.resolve(len));
        shim::splice("srange", structure, s, e, replacement)
    }
}

/// The empty range at the start of the sequence — an insertion point for
/// prepending elements.
pub fn beginning() -> SRangeDynamic {
    SRangeDynamic { start: Bound::Fixed(0), end: Bound::Fixed(0) }
}

/// The empty range at the end of the sequence — an insertion point for
/// appending elements.
pub fn end() -> SRangeDynamic {
    SRangeDynamic { start: Bound::FromEnd(0), end: Bound::FromEnd(0) }
}
