//! The six concrete worked examples of spec §8, translated from the
//! distilled spec's Clojure-flavored notation into calls against this
//! crate's actual builtin constructors.

use std::rc::Rc;

use weave::builtins;
use weave::compiler::{compile_paths, PathElem};
use weave::value::{OrderedMap, Scalar, Value};
use weave::{select, transform};

fn inc(v: Value<Scalar>) -> Value<Scalar> {
    match v {
        Value::Scalar(Scalar::Int(i)) => Value::int(i + 1),
        other => other,
    }
}

fn map_of(pairs: impl IntoIterator<Item = (&'static str, Value<Scalar>)>) -> Value<Scalar> {
    let mut m = OrderedMap::new();
    for (k, v) in pairs {
        m.put(Value::keyword(k), v);
    }
    Value::Map(m)
}

/// `transform([:a ALL :b] inc {:a [{:b 3} {:b 5}]})` → `{:a [{:b 4} {:b 6}]}`.
#[test]
fn scenario_1_nested_keypath_all_keypath() {
    let path = compile_paths([
        PathElem::step(builtins::keypath(Value::keyword("a"))),
        PathElem::step(builtins::all::<Scalar>()),
        PathElem::step(builtins::keypath(Value::keyword("b"))),
    ]);
    let structure = map_of([(
        "a",
        Value::vec([map_of([("b", Value::int(3))]), map_of([("b", Value::int(5))])]),
    )]);
    let result = transform(&path, |_vals, v| Ok(inc(v)), structure).unwrap();
    let expected = map_of([(
        "a",
        Value::vec([map_of([("b", Value::int(4))]), map_of([("b", Value::int(6))])]),
    )]);
    assert_eq!(result, expected);
}

/// `select([ALL :name] [{:name "x" :age 1} {:name "y" :age 2}])` → `["x" "y"]`.
#[test]
fn scenario_2_select_name_from_each_entry() {
    let path = compile_paths([
        PathElem::step(builtins::all::<Scalar>()),
        PathElem::step(builtins::keypath(Value::keyword("name"))),
    ]);
    let structure = Value::vec([
        map_of([("name", Value::str("x")), ("age", Value::int(1))]),
        map_of([("name", Value::str("y")), ("age", Value::int(2))]),
    ]);
    let got = select(&path, &structure).unwrap();
    assert_eq!(got, vec![Value::str("x"), Value::str("y")]);
}

/// `setval([(srange 1 3)] [:x :y] [0 1 2 3 4])` → `[0 :x :y 3 4]`.
#[test]
fn scenario_3_setval_over_srange() {
    let path = compile_paths([PathElem::step(builtins::srange::<Scalar>(1, 3))]);
    let structure = Value::vec([Value::int(0), Value::int(1), Value::int(2), Value::int(3), Value::int(4)]);
    let got = weave::setval(&path, Value::vec([Value::keyword("x"), Value::keyword("y")]), structure).unwrap();
    assert_eq!(
        got,
        Value::vec([Value::int(0), Value::keyword("x"), Value::keyword("y"), Value::int(3), Value::int(4)])
    );
}

/// `transform([ALL (collect-one :k) :v] (fn [k v] (+ k v)) [{:k 10 :v 1} {:k 20 :v 2}])`
/// → `[{:k 10 :v 11} {:k 20 :v 22}]`.
#[test]
fn scenario_4_collect_one_feeds_terminal_fn() {
    let k_path = compile_paths([PathElem::step(builtins::keypath(Value::keyword("k")))]);
    let path = compile_paths([
        PathElem::step(builtins::all::<Scalar>()),
        PathElem::step(builtins::collect_one(k_path)),
        PathElem::step(builtins::keypath(Value::keyword("v"))),
    ]);
    let structure = Value::vec([
        map_of([("k", Value::int(10)), ("v", Value::int(1))]),
        map_of([("k", Value::int(20)), ("v", Value::int(2))]),
    ]);
    let result = transform(
        &path,
        |vals, v| match (&vals[0], &v) {
            (Value::Scalar(Scalar::Int(k)), Value::Scalar(Scalar::Int(vv))) => Ok(Value::int(k + vv)),
            _ => Ok(v),
        },
        structure,
    )
    .unwrap();
    let expected = Value::vec([
        map_of([("k", Value::int(10)), ("v", Value::int(11))]),
        map_of([("k", Value::int(20)), ("v", Value::int(22))]),
    ]);
    assert_eq!(result, expected);
}

/// `transform([(filterer odd?) ALL] inc [1 2 3 4 5])` → `[2 2 4 4 6]`.
#[test]
fn scenario_5_filterer_then_all() {
    let is_odd: weave::DynPred<Scalar> = Rc::new(|v: &Value<Scalar>| matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 != 0));
    let odd_path = compile_paths([PathElem::step(builtins::predicate(is_odd))]);
    let path = compile_paths([
        PathElem::step(builtins::filterer(odd_path)),
        PathElem::step(builtins::all::<Scalar>()),
    ]);
    let structure = Value::vec([Value::int(1), Value::int(2), Value::int(3), Value::int(4), Value::int(5)]);
    let result = transform(&path, |_vals, v| Ok(inc(v)), structure).unwrap();
    assert_eq!(
        result,
        Value::vec([Value::int(2), Value::int(2), Value::int(4), Value::int(4), Value::int(6)])
    );
}

/// `select([(if-path even? (view (fn [x] (* x 2))) (view (fn [x] (* x 10))))] 3)` → `[30]`.
#[test]
fn scenario_6_if_path_dispatches_to_else_view() {
    let is_even: weave::DynPred<Scalar> = Rc::new(|v: &Value<Scalar>| matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 == 0));
    let even_path = compile_paths([PathElem::step(builtins::predicate(is_even))]);
    let times2: weave::DynXform<Scalar> = Rc::new(|v: &Value<Scalar>| match v {
        Value::Scalar(Scalar::Int(i)) => Value::int(i * 2),
        other => other.clone(),
    });
    let times10: weave::DynXform<Scalar> = Rc::new(|v: &Value<Scalar>| match v {
        Value::Scalar(Scalar::Int(i)) => Value::int(i * 10),
        other => other.clone(),
    });
    let then_view = compile_paths([PathElem::step(builtins::view(times2))]);
    let else_view = compile_paths([PathElem::step(builtins::view(times10))]);
    let cond = builtins::if_path_else(even_path, then_view, else_view);
    let path = compile_paths([PathElem::step(cond)]);
    let got = select(&path, &Value::int(3)).unwrap();
    assert_eq!(got, vec![Value::int(30)]);
}
