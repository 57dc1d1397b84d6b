//! weave - a composable navigation-and-transformation engine for nested
//! immutable data
//!
//! This crate provides a path-based select/transform engine over a generic
//! recursive value model: a handful of built-in navigators (`ALL`, `FIRST`,
//! `LAST`, `keypath`, `srange`, `walker`, `filterer`, ...) compose into
//! `CompiledPath<L>`s that run against a `Value<L>` structure in either
//! select mode (collect every pointed-at value) or transform mode (rebuild
//! the structure with every pointed-at value replaced).
//!
//! # Overview
//!
//! - **[`Value<L>`](value::Value)**: the recursive, generic value model
//!   (scalar leaf, map/vec/seq/set containers, function leaf) every path
//!   navigates.
//! - **[`Navigator<L>`](navigator::Navigator)**: the protocol every path
//!   element implements — built-in or user-declared via
//!   [`paramspec`].
//! - **[`compiler`]**: flattens a path tree into a single
//!   [`CompiledPath<L>`](compiler::CompiledPath) and assigns late-bound
//!   parameter slots.
//! - **[`engine`]**: the top-level `select`/`transform`/`setval` entry
//!   points.
//! - **[`sugar`]**: convenience wrappers (`select_one`, `select_first`,
//!   `replace_in`, ...) layered over the engine.
//!
//! # Quick Start
//!
//! ```rust
//! use weave::{builtins, compiler::{compile_paths, PathElem}, engine, value::Value};
//!
//! let path = compile_paths([
//!     PathElem::step(builtins::all::<weave::value::Scalar>()),
//!     PathElem::step(builtins::keypath(Value::keyword("name"))),
//! ]);
//!
//! let mut alice = weave::value::OrderedMap::new();
//! alice.put(Value::keyword("name"), Value::str("alice"));
//! let mut bob = weave::value::OrderedMap::new();
//! bob.put(Value::keyword("name"), Value::str("bob"));
//! let structure = Value::vec([Value::Map(alice), Value::Map(bob)]);
//!
//! let names = engine::select(&path, &structure).unwrap();
//! assert_eq!(names, vec![Value::str("alice"), Value::str("bob")]);
//! ```
//!
//! # Reference
//!
//! The navigator protocol, the collector side channel, and the late-bound
//! parameter frame are the three composable primitives everything else in
//! this crate (the built-in library, the compiler, the engine) is built on
//! top of; see each module's doc comment for the design rationale behind it.

pub mod builtins;
pub mod collector;
pub mod compiler;
pub mod engine;
pub mod error;
pub mod frame;
pub mod navigator;
pub mod paramspec;
pub mod shim;
pub mod sugar;
pub mod value;

pub use compiler::{bind_params, compile_paths, BoundPath, CompiledPath, Executable, PathElem};
pub use engine::{select, setval, transform};
pub use error::PathError;
pub use frame::{Arg, Frame};
pub use navigator::{ChildNavigator, Cont, DynPred, DynXform, Navigator};
pub use paramspec::{define_paramscollector, define_paramspath, ParamCollector, ParamNav};
pub use sugar::{concat_merge, replace_in, select_first, select_one, select_one_exact};
pub use value::{OrderedMap, Scalar, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_start_example_round_trips() {
        let path = compile_paths([
            PathElem::step(builtins::all::<Scalar>()),
            PathElem::step(builtins::keypath(Value::keyword("name"))),
        ]);
        let mut alice = OrderedMap::new();
        alice.put(Value::keyword("name"), Value::str("alice"));
        let structure = Value::vec([Value::Map(alice)]);
        assert_eq!(select(&path, &structure).unwrap(), vec![Value::str("alice")]);
    }
}
