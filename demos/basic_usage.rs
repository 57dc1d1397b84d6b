//! A short tour of the navigation-and-transformation engine: building a path,
//! selecting, transforming, and using a collector plus a late-bound parameter.

use weave::builtins;
use weave::compiler::{bind_params, compile_paths, PathElem};
use weave::value::{OrderedMap, Scalar, Value};
use weave::{select, setval, transform};

fn person(name: &str, age: i64) -> Value<Scalar> {
    let mut m = OrderedMap::new();
    m.put(Value::keyword("name"), Value::str(name));
    m.put(Value::keyword("age"), Value::int(age));
    Value::Map(m)
}

fn main() {
    let people = Value::vec([person("ada", 36), person("grace", 43)]);

    // select: collect every name.
    let names_path = compile_paths([
        PathElem::step(builtins::all::<Scalar>()),
        PathElem::step(builtins::keypath(Value::keyword("name"))),
    ]);
    let names = select(&names_path, &people).unwrap();
    println!("names: {:?}", names);

    // transform: increment every age in place.
    let ages_path = compile_paths([
        PathElem::step(builtins::all::<Scalar>()),
        PathElem::step(builtins::keypath(Value::keyword("age"))),
    ]);
    let birthdays = transform(
        &ages_path,
        |_vals, v| match v {
            Value::Scalar(Scalar::Int(i)) => Ok(Value::int(i + 1)),
            other => Ok(other),
        },
        people,
    )
    .unwrap();
    println!("after a birthday: {}", birthdays);

    // setval: overwrite a contiguous subrange of a sequence.
    let range_path = compile_paths([PathElem::step(builtins::srange::<Scalar>(1, 3))]);
    let nums = Value::vec([0, 1, 2, 3, 4].map(Value::int));
    let patched = setval(&range_path, Value::vec([Value::keyword("x"), Value::keyword("y")]), nums).unwrap();
    println!("patched range: {}", patched);

    // a late-bound keypath: the key is supplied at call time, not compile time.
    let late_path = compile_paths([PathElem::step(builtins::keypath_late::<Scalar>())]);
    let params = vec![Value::keyword("name")];
    let bound = bind_params(&late_path, &params, 0);
    let late_hit = select(&bound, &person("ada", 36)).unwrap();
    println!("late-bound lookup: {:?}", late_hit);
}
