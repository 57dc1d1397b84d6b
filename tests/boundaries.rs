//! Boundary cases named explicitly in spec §8: empty containers under `ALL`,
//! `FIRST`/`LAST` on an empty sequence, `srange` with `s = e`, a walker over a
//! bare leaf, and a `filterer` continuation that returns the wrong length.

use std::rc::Rc;

use weave::builtins;
use weave::compiler::{bind_params, compile_paths, PathElem};
use weave::error::PathError;
use weave::value::{OrderedMap, Scalar, Value};
use weave::{select, transform};

#[test]
fn all_over_empty_map_selects_nothing() {
    let path = compile_paths([PathElem::step(builtins::all::<Scalar>())]);
    let structure: Value<Scalar> = Value::Map(OrderedMap::new());
    assert!(select(&path, &structure).unwrap().is_empty());
}

#[test]
fn all_over_empty_vec_selects_nothing() {
    let path = compile_paths([PathElem::step(builtins::all::<Scalar>())]);
    let structure: Value<Scalar> = Value::Vec(Vec::new());
    assert!(select(&path, &structure).unwrap().is_empty());
}

#[test]
fn all_over_empty_set_selects_nothing() {
    let path = compile_paths([PathElem::step(builtins::all::<Scalar>())]);
    let structure: Value<Scalar> = Value::Set(Vec::new());
    assert!(select(&path, &structure).unwrap().is_empty());
}

#[test]
fn first_on_empty_sequence_is_shape_mismatch() {
    let path = compile_paths([PathElem::step(builtins::first::<Scalar>())]);
    let structure: Value<Scalar> = Value::Vec(Vec::new());
    assert!(matches!(select(&path, &structure), Err(PathError::ShapeMismatch { .. })));
}

#[test]
fn last_on_empty_sequence_is_shape_mismatch() {
    let path = compile_paths([PathElem::step(builtins::last::<Scalar>())]);
    let structure: Value<Scalar> = Value::Vec(Vec::new());
    assert!(matches!(select(&path, &structure), Err(PathError::ShapeMismatch { .. })));
}

/// `srange(s, s)` points at an empty slice; transforming it inserts the
/// continuation's output at position `s` without removing anything.
#[test]
fn srange_with_equal_bounds_is_an_insertion_point() {
    let path = compile_paths([PathElem::step(builtins::srange::<Scalar>(2, 2))]);
    let structure = Value::vec([Value::int(0), Value::int(1), Value::int(2), Value::int(3)]);
    let empty_hit = select(&path, &structure).unwrap();
    assert_eq!(empty_hit, vec![Value::Vec(Vec::new())]);

    let result = weave::setval(&path, Value::vec([Value::keyword("ins")]), structure).unwrap();
    assert_eq!(
        result,
        Value::vec([Value::int(0), Value::int(1), Value::keyword("ins"), Value::int(2), Value::int(3)])
    );
}

#[test]
fn walker_over_a_bare_leaf_with_no_match_selects_nothing() {
    let pred: weave::DynPred<Scalar> = Rc::new(|_v: &Value<Scalar>| false);
    let path = compile_paths([PathElem::step(builtins::walker(pred))]);
    let structure = Value::int(42);
    assert!(select(&path, &structure).unwrap().is_empty());
}

#[test]
fn walker_over_a_bare_leaf_that_matches_selects_it() {
    let pred: weave::DynPred<Scalar> = Rc::new(|v: &Value<Scalar>| matches!(v, Value::Scalar(Scalar::Int(_))));
    let path = compile_paths([PathElem::step(builtins::walker(pred))]);
    let structure = Value::int(42);
    assert_eq!(select(&path, &structure).unwrap(), vec![Value::int(42)]);
}

#[test]
fn filterer_continuation_returning_shorter_sequence_is_arity_mismatch() {
    let is_odd: weave::DynPred<Scalar> = Rc::new(|v: &Value<Scalar>| matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 != 0));
    let odd_path = compile_paths([PathElem::step(builtins::predicate(is_odd))]);
    let path = compile_paths([PathElem::step(builtins::filterer(odd_path))]);
    let structure = Value::vec([Value::int(1), Value::int(2), Value::int(3)]);
    let err = transform(&path, |_vals, _v| Ok(Value::vec([Value::int(0)])), structure).unwrap_err();
    assert!(matches!(err, PathError::ArityMismatch { expected: 2, found: 1 }));
}

#[test]
fn filterer_continuation_returning_longer_sequence_is_arity_mismatch() {
    let is_odd: weave::DynPred<Scalar> = Rc::new(|v: &Value<Scalar>| matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 != 0));
    let odd_path = compile_paths([PathElem::step(builtins::predicate(is_odd))]);
    let path = compile_paths([PathElem::step(builtins::filterer(odd_path))]);
    let structure = Value::vec([Value::int(1), Value::int(2), Value::int(3)]);
    let err = transform(
        &path,
        |_vals, _v| Ok(Value::vec([Value::int(0), Value::int(0), Value::int(0)])),
        structure,
    )
    .unwrap_err();
    assert!(matches!(err, PathError::ArityMismatch { expected: 2, found: 3 }));
}

/// A sub-path with two late-bound `keypath` leaves, compiled standalone (where
/// they get offsets 0 and 1) and then embedded — not flattened — into an outer
/// path via `PathElem::from`. The compiler's offset-assignment pass re-runs
/// over the inner path's steps when it is spliced in; each leaf's offset must
/// be *set* to the cumulative count on every pass, not accumulated across
/// passes, or the second leaf ends up reading past the end of `params`.
#[test]
fn embedded_two_late_slot_subpath_resolves_each_offset_correctly() {
    let inner = compile_paths([
        PathElem::step(builtins::keypath_late::<Scalar>()),
        PathElem::step(builtins::keypath_late::<Scalar>()),
    ]);
    let outer = compile_paths([PathElem::from(inner)]);
    assert_eq!(outer.slot_count(), 2);

    let mut innermost = OrderedMap::new();
    innermost.put(Value::keyword("b"), Value::str("leaf"));
    let mut outer_map = OrderedMap::new();
    outer_map.put(Value::keyword("a"), Value::Map(innermost));
    let structure = Value::Map(outer_map);

    let params = vec![Value::keyword("a"), Value::keyword("b")];
    let bound = bind_params(&outer, &params, 0);
    let got = select(&bound, &structure).unwrap();
    assert_eq!(got, vec![Value::str("leaf")]);
}
