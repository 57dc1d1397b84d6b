//! The navigated value model: `Value<L>`, a recursive tagged union over four
//! container shapes plus a scalar leaf and a first-class function leaf.
//!
//! `Value<L>` is generic over the scalar payload `L`, the same way the teacher
//! crate's `Pattern<V>` is generic over its value type: a `Value<L>` is either an
//! opaque leaf (`Scalar(L)`) or one of four container shapes holding more
//! `Value<L>`s recursively.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "thread-safe")]
use std::sync::Arc;

/// The built-in scalar leaf type used throughout the examples and tests in this
/// crate. Callers who need a richer leaf type can use `Value<L>` directly with
/// their own `L`; `Scalar` is provided so paths over simple data (the concrete
/// scenarios in the spec, numbers, strings, keywords) don't require a custom type.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// A keyword/symbol-like atom, e.g. `:name` in the distilled spec's notation.
    Keyword(String),
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Str(s) => write!(f, "{s:?}"),
            Scalar::Keyword(k) => write!(f, ":{k}"),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Str(s) => write!(f, "{s}"),
            Scalar::Keyword(k) => write!(f, ":{k}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

/// A callable stored as ordinary navigated data (the `Fn` variant of `Value<L>`).
///
/// This is distinct from the predicate/transform closures the path compiler and
/// navigators hold internally (see `frame.rs`, `navigator.rs`): it exists only so
/// that a structure being navigated can itself contain a first-class function as a
/// leaf value, e.g. a `putval`-supplied callback or a value produced by `collect`.
#[cfg(not(feature = "thread-safe"))]
pub type DynValueFn<L> = Rc<dyn Fn(&Value<L>) -> Value<L>>;
#[cfg(feature = "thread-safe")]
pub type DynValueFn<L> = Arc<dyn Fn(&Value<L>) -> Value<L> + Send + Sync>;

/// An insertion-ordered association list standing in for the "keyed map"
/// container shape. See `shim.rs` for the operations the engine performs on it
/// and `DESIGN.md` for why this is a `Vec` of pairs rather than a `HashMap`.
#[derive(Clone, PartialEq, Debug)]
pub struct OrderedMap<L>(pub Vec<(Value<L>, Value<L>)>);

impl<L> Default for OrderedMap<L> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<L: PartialEq> OrderedMap<L> {
    pub fn new() -> Self {
        OrderedMap(Vec::new())
    }

    pub fn get(&self, key: &Value<L>) -> Option<&Value<L>> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert `value` at `key`, replacing any existing entry in place so the
    /// original insertion position is preserved; otherwise appended at the end.
    pub fn put(&mut self, key: Value<L>, value: Value<L>) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A tagged union of six variants: an opaque scalar leaf, three ordered-container
/// shapes (map, vec, seq), a set, and a first-class function leaf.
///
/// All containers are persistent — every navigator that "updates" a `Value<L>`
/// returns a new one. Structural sharing with the input is used wherever it falls
/// out naturally from Rust ownership (e.g. positions a navigator did not touch are
/// moved, not cloned, when `structure` is owned) but is not part of the contract.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value<L> {
    Scalar(L),
    Map(OrderedMap<L>),
    Vec(Vec<Value<L>>),
    Seq(VecDeque<Value<L>>),
    Set(Vec<Value<L>>),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(DynValueFn<L>),
}

impl<L: PartialEq> PartialEq for Value<L> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Vec(a), Value::Vec(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            // Functions are never structurally equal to anything, including
            // themselves by pointer identity; this mirrors the teacher crate's
            // `TraversalWeight` closures, which likewise carry no `PartialEq`.
            (Value::Fn(_), Value::Fn(_)) => false,
            _ => false,
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for Value<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_debug_with_depth(f, 0, 12)
    }
}

impl<L: fmt::Debug> Value<L> {
    fn fmt_debug_with_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize, max_depth: usize) -> fmt::Result {
        if depth > max_depth {
            return write!(f, "...");
        }
        match self {
            Value::Scalar(l) => write!(f, "{l:?}"),
            Value::Map(m) => {
                let mut dbg = f.debug_map();
                for (k, v) in &m.0 {
                    dbg.entry(&DebugAtDepth { value: k, depth: depth + 1, max_depth }, &DebugAtDepth { value: v, depth: depth + 1, max_depth });
                }
                dbg.finish()
            }
            Value::Vec(items) => {
                let mut dbg = f.debug_list();
                for v in items {
                    dbg.entry(&DebugAtDepth { value: v, depth: depth + 1, max_depth });
                }
                dbg.finish()
            }
            Value::Seq(items) => {
                let mut dbg = f.debug_list();
                for v in items {
                    dbg.entry(&DebugAtDepth { value: v, depth: depth + 1, max_depth });
                }
                dbg.finish()
            }
            Value::Set(items) => {
                write!(f, "#")?;
                let mut dbg = f.debug_list();
                for v in items {
                    dbg.entry(&DebugAtDepth { value: v, depth: depth + 1, max_depth });
                }
                dbg.finish()
            }
            Value::Fn(_) => write!(f, "<fn>"),
        }
    }
}

struct DebugAtDepth<'a, L> {
    value: &'a Value<L>,
    depth: usize,
    max_depth: usize,
}

impl<'a, L: fmt::Debug> fmt::Debug for DebugAtDepth<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_debug_with_depth(f, self.depth, self.max_depth)
    }
}

impl<L: fmt::Display> fmt::Display for Value<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(l) => write!(f, "{l}"),
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.0.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} {v}")?;
                }
                write!(f, "}}")
            }
            Value::Vec(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Seq(items) => {
                write!(f, "(")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
            Value::Set(items) => {
                write!(f, "#{{")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "}}")
            }
            Value::Fn(_) => write!(f, "<fn>"),
        }
    }
}

impl<L> Value<L> {
    pub fn vec(items: impl IntoIterator<Item = Value<L>>) -> Self {
        Value::Vec(items.into_iter().collect())
    }

    pub fn is_ordered_sequence(&self) -> bool {
        matches!(self, Value::Vec(_) | Value::Seq(_))
    }
}

impl Value<Scalar> {
    pub fn int(v: i64) -> Self {
        Value::Scalar(Scalar::Int(v))
    }

    pub fn str(v: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Str(v.into()))
    }

    pub fn keyword(v: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Keyword(v.into()))
    }

    pub fn boolean(v: bool) -> Self {
        Value::Scalar(Scalar::Bool(v))
    }
}
