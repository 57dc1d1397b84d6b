//! Property-based tests for the six laws of spec §8, run with `proptest`
//! the way `pattern-core`'s own property suites generate small nested
//! structures rather than hand-enumerating cases.

use proptest::collection::vec as pvec;
use proptest::prelude::*;

use weave::builtins;
use weave::compiler::{compile_paths, select_steps, PathElem};
use weave::value::{Scalar, Value};
use weave::{engine, select, setval, transform, Executable, Frame};

fn int_vec(v: &[i64]) -> Value<Scalar> {
    Value::vec(v.iter().map(|i| Value::int(*i)))
}

fn nested_int_vec(vv: &[Vec<i64>]) -> Value<Scalar> {
    Value::vec(vv.iter().map(|v| int_vec(v)))
}

fn all_path() -> weave::CompiledPath<Scalar> {
    compile_paths([PathElem::step(builtins::all::<Scalar>())])
}

fn inc(v: Value<Scalar>) -> Value<Scalar> {
    match v {
        Value::Scalar(Scalar::Int(i)) => Value::int(i + 1),
        other => other,
    }
}

proptest! {
    /// `transform(P, id, S) == S` for a handful of representative `P`s.
    #[test]
    fn identity_law(xs in pvec(any::<i64>(), 0..8)) {
        let structure = int_vec(&xs);
        let path = all_path();
        let result = transform(&path, |_vals, x| Ok(x), structure.clone()).unwrap();
        prop_assert_eq!(result, structure);
    }

    /// `select(P, transform(P, g, S)) == select(P, S).map(g)`.
    #[test]
    fn select_transform_correspondence(xs in pvec(any::<i64>(), 0..8)) {
        let structure = int_vec(&xs);
        let path = all_path();
        let before = select(&path, &structure).unwrap();
        let expected: Vec<_> = before.into_iter().map(inc).collect();
        let transformed = transform(&path, |_vals, x| Ok(inc(x)), structure).unwrap();
        let after = select(&path, &transformed).unwrap();
        prop_assert_eq!(after, expected);
    }

    /// `select([P, Q], S) == flatten(select(P, S).map(|x| select(Q, x)))`.
    #[test]
    fn composition_law(xss in pvec(pvec(any::<i64>(), 0..4), 0..4)) {
        let structure = nested_int_vec(&xss);
        let p = builtins::all::<Scalar>();
        let q = builtins::all::<Scalar>();
        let composed = compile_paths([PathElem::step(p), PathElem::step(q)]);
        let direct = select(&composed, &structure).unwrap();

        let outer = all_path();
        let inner = all_path();
        let mut expected = Vec::new();
        for x in select(&outer, &structure).unwrap() {
            expected.extend(select(&inner, &x).unwrap());
        }
        prop_assert_eq!(direct, expected);
    }

    /// `select(P, setval(P, v, S))` is a vector of `v` with length `|select(P, S)|`.
    #[test]
    fn setval_constant_law(xs in pvec(any::<i64>(), 0..8)) {
        let structure = int_vec(&xs);
        let path = all_path();
        let hit_count = select(&path, &structure).unwrap().len();
        let v = Value::keyword("marker");
        let result = setval(&path, v.clone(), structure).unwrap();
        let after = select(&path, &result).unwrap();
        prop_assert_eq!(after, vec![v; hit_count]);
    }

    /// Every position `S` outside `[s, e)` is untouched by a `srange` transform.
    #[test]
    fn shape_preservation_outside_srange(xs in pvec(any::<i64>(), 2..10), s in 0usize..5, len in 0usize..5) {
        let n = xs.len();
        let s = s.min(n);
        let e = (s + len).min(n);
        let structure = int_vec(&xs);
        let path = compile_paths([PathElem::step(builtins::srange::<Scalar>(s, e))]);
        let result = setval(&path, Value::vec(Vec::<Value<Scalar>>::new()), structure).unwrap();
        if let Value::Vec(items) = &result {
            for i in 0..s {
                prop_assert_eq!(&items[i], &Value::int(xs[i]));
            }
            let tail_start = s; // the [s,e) range became empty, so positions shift left by (e - s)
            for i in e..n {
                prop_assert_eq!(&items[tail_start + (i - e)], &Value::int(xs[i]));
            }
        } else {
            prop_assert!(false, "expected a vec back");
        }
    }

    /// Repeating select/transform on identical inputs yields identical outputs.
    #[test]
    fn determinism(xs in pvec(any::<i64>(), 0..8)) {
        let structure = int_vec(&xs);
        let path = all_path();
        let first_select = select(&path, &structure).unwrap();
        let second_select = select(&path, &structure).unwrap();
        prop_assert_eq!(first_select, second_select);

        let first_transform = transform(&path, |_vals, x| Ok(inc(x)), structure.clone()).unwrap();
        let second_transform = transform(&path, |_vals, x| Ok(inc(x)), structure).unwrap();
        prop_assert_eq!(first_transform, second_transform);
    }
}

#[test]
fn select_steps_is_reusable_entry_point_for_composition_law_helper() {
    // select_steps/Frame/Executable are imported above purely so the law
    // helpers above type-check against the public surface; this sanity test
    // exercises that import set directly to avoid "unused import" drift.
    let path = all_path();
    let frame: Frame<Scalar> = path.frame().unwrap();
    let structure = int_vec(&[1, 2, 3]);
    let got = select_steps(Executable::steps(&path), &frame, &structure).unwrap();
    assert_eq!(got, engine::select(&path, &structure).unwrap());
}
