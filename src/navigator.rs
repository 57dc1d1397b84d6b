//! The navigator protocol: the `Navigator<L>` trait every path element
//! implements, and the reified continuation chain (`Cont<L>`) that stands in for
//! "the rest of the path" without requiring actual `Rc<dyn Fn>` closures for
//! control flow (see the Design Notes in `SPEC_FULL.md` §9).

use std::rc::Rc;

#[cfg(feature = "thread-safe")]
use std::sync::Arc;

use crate::error::PathError;
use crate::frame::Frame;
use crate::value::Value;

/// A predicate over a navigated value, used by `walker`, `filterer`,
/// `selected`/`not_selected`, and literal function/set navigators.
#[cfg(not(feature = "thread-safe"))]
pub type DynPred<L> = Rc<dyn Fn(&Value<L>) -> bool>;
#[cfg(feature = "thread-safe")]
pub type DynPred<L> = Arc<dyn Fn(&Value<L>) -> bool + Send + Sync>;

/// A pure value-to-value transform, used by `view`/`transformed` and by the
/// top-level `transform`/`setval` entry points (wrapped with the collected-vals
/// prefix — see `engine.rs`).
#[cfg(not(feature = "thread-safe"))]
pub type DynXform<L> = Rc<dyn Fn(&Value<L>) -> Value<L>>;
#[cfg(feature = "thread-safe")]
pub type DynXform<L> = Arc<dyn Fn(&Value<L>) -> Value<L> + Send + Sync>;

/// A boxed navigator, stored in a `CompiledPath<L>`'s step list.
pub type BoxedNav<L> = Box<dyn Navigator<L>>;

/// The reified continuation: a linked chain of `(steps, pos)` frames, terminated
/// by `Done`. A navigator receives "the rest of the path" as a `&Cont<L>` and
/// must not inspect it beyond forwarding it to `select_from`/`transform_from` —
/// this is the Rust rendition of "navigators must not inspect `k`".
pub enum Cont<'a, L> {
    Frame {
        steps: &'a [BoxedNav<L>],
        pos: usize,
        rest: &'a Cont<'a, L>,
    },
    Done,
}

impl<'a, L> Cont<'a, L> {
    /// Build the continuation for "run `steps` from the start, then stop".
    pub fn of(steps: &'a [BoxedNav<L>]) -> Cont<'a, L> {
        Cont::Frame {
            steps,
            pos: 0,
            rest: &Cont::Done,
        }
    }

    /// Build the continuation for "run `steps` from the start, then `rest`" —
    /// used by `cond_path`/`multi_path`/`CompiledPath`-as-Navigator to splice an
    /// inner path's steps in front of whatever continuation they were given.
    pub fn chain(steps: &'a [BoxedNav<L>], rest: &'a Cont<'a, L>) -> Cont<'a, L> {
        Cont::Frame { steps, pos: 0, rest }
    }
}

/// The terminal handler reached once the whole step chain is exhausted: for
/// `select` this pushes the structure, for `transform` this applies the user
/// function (with the collected-vals prefix). See `select_from`/`transform_from`.
pub type TermFn<'a, L> = dyn Fn(&[Value<L>], Value<L>) -> Result<Value<L>, PathError> + 'a;

/// Every path element — built-in or user-declared — implements this.
///
/// `select_step`/`transform_step` receive the continuation representing "the
/// rest of the path" (already advanced past `self`) and must call
/// `select_from`/`transform_from` on it once per sub-structure this navigator
/// points to.
pub trait Navigator<L> {
    /// Number of late-bound parameter slots this navigator consumes. Zero for
    /// constant navigators.
    fn slots(&self) -> usize {
        0
    }

    /// Whether this step is a collector (does not move the cursor, only appends
    /// to the collected-vals vector). Used only for the compiler's `has_collector`
    /// flag; the actual collecting behavior lives in `CollectorStep`.
    fn is_collector(&self) -> bool {
        false
    }

    /// Re-base this step's late-bound parameter offsets by `base`. Called once by
    /// the compiler's offset-assignment pass (`compiler.rs`) with the cumulative
    /// slot count to this step's left. Parameterized leaves (`keypath`, `putval`)
    /// shift their own `Arg::Late` offset; composite navigators that embed a
    /// sub-path (`filterer`, `cond_path`, ...) forward the call to their inner
    /// steps. Constant navigators with no slots keep the default no-op.
    fn offset_slots(&mut self, _base: usize) {}

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError>;

    fn transform_step(
        &self,
        cont: &Cont<L>,
        structure: Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        term: &TermFn<L>,
    ) -> Result<Value<L>, PathError>;
}

/// Dispatch select through a continuation: if the chain is exhausted, push the
/// structure; otherwise hand off to the next navigator in the chain.
pub fn select_from<L: Clone>(
    cont: &Cont<L>,
    structure: &Value<L>,
    frame: &Frame<L>,
    vals: &[Value<L>],
    out: &mut Vec<Value<L>>,
) -> Result<(), PathError> {
    match cont {
        Cont::Done => {
            out.push(structure.clone());
            Ok(())
        }
        Cont::Frame { steps, pos, rest } => {
            if *pos >= steps.len() {
                select_from(rest, structure, frame, vals, out)
            } else {
                steps[*pos].select_step(
                    &Cont::Frame {
                        steps,
                        pos: pos + 1,
                        rest,
                    },
                    structure,
                    frame,
                    vals,
                    out,
                )
            }
        }
    }
}

/// Dispatch transform through a continuation: if the chain is exhausted, apply
/// the terminal handler; otherwise hand off to the next navigator in the chain.
pub fn transform_from<L: Clone>(
    cont: &Cont<L>,
    structure: Value<L>,
    frame: &Frame<L>,
    vals: &[Value<L>],
    term: &TermFn<L>,
) -> Result<Value<L>, PathError> {
    match cont {
        Cont::Done => term(vals, structure),
        Cont::Frame { steps, pos, rest } => {
            if *pos >= steps.len() {
                transform_from(rest, structure, frame, vals, term)
            } else {
                steps[*pos].transform_step(
                    &Cont::Frame {
                        steps,
                        pos: pos + 1,
                        rest,
                    },
                    structure,
                    frame,
                    vals,
                    term,
                )
            }
        }
    }
}

/// A navigator expressible as "extract some children, let the rest of the path
/// run on each, then rebuild a container of the same shape from the
/// replacements". Covers `ALL`, `FIRST`/`LAST`, `keypath`, `srange`, `view`,
/// `transformed`, and `selected`/`not_selected` — see their modules under
/// `builtins/`. Control-flow navigators that need to splice in a *different*
/// continuation (`cond_path`, `multi_path`, `CompiledPath` itself) implement
/// `Navigator<L>` directly instead.
pub trait ChildNavigator<L> {
    fn children(&self, structure: &Value<L>, frame: &Frame<L>) -> Result<Vec<Value<L>>, PathError>;
    fn rebuild(&self, structure: Value<L>, frame: &Frame<L>, new_children: Vec<Value<L>>) -> Result<Value<L>, PathError>;
    fn slots(&self) -> usize {
        0
    }

    /// See `Navigator::offset_slots`; forwarded by the blanket impl below since
    /// a type can't both go through this blanket impl and override
    /// `Navigator::offset_slots` directly (that would be a conflicting impl).
    fn offset_slots(&mut self, _base: usize) {}
}

impl<L: Clone, T: ChildNavigator<L>> Navigator<L> for T {
    fn slots(&self) -> usize {
        ChildNavigator::slots(self)
    }

    fn offset_slots(&mut self, base: usize) {
        ChildNavigator::offset_slots(self, base)
    }

    fn select_step(
        &self,
        cont: &Cont<L>,
        structure: &Value<L>,
        frame: &Frame<L>,
        vals: &[Value<L>],
        out: &mut Vec<Value<L>>,
    ) -> Result<(), PathError> {
        let kids = self.children(structure, frame)?;
        for kid in &kids {
            select_from(cont, kid, frame, vals, out)?;
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
        let kids = self.children(&structure, frame)?;
        let mut new_kids = Vec::with_capacity(kids.len());
        for kid in kids {
            new_kids.push(transform_from(cont, kid, frame, vals, term)?);
        }
        self.rebuild(structure, frame, new_kids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    /// A minimal ChildNavigator standing in for `ALL` over a vec, used to
    /// exercise `select_from`/`transform_from` composition in isolation.
    struct AllVec;

    impl ChildNavigator<Scalar> for AllVec {
        fn children(&self, structure: &Value<Scalar>, _frame: &Frame<Scalar>) -> Result<Vec<Value<Scalar>>, PathError> {
            match structure {
                Value::Vec(items) => Ok(items.clone()),
                _ => Err(PathError::shape_mismatch("ALL", "non-vec")),
            }
        }

        fn rebuild(&self, structure: Value<Scalar>, _frame: &Frame<Scalar>, new_children: Vec<Value<Scalar>>) -> Result<Value<Scalar>, PathError> {
            let _ = structure;
            Ok(Value::Vec(new_children))
        }
    }

    #[test]
    fn single_step_select_visits_every_child() {
        let steps: Vec<BoxedNav<Scalar>> = vec![Box::new(AllVec)];
        let cont = Cont::of(&steps);
        let structure = Value::vec([Value::int(1), Value::int(2), Value::int(3)]);
        let frame = Frame::empty();
        let mut out = Vec::new();
        select_from(&cont, &structure, &frame, &[], &mut out).unwrap();
        assert_eq!(out, vec![Value::int(1), Value::int(2), Value::int(3)]);
    }

    #[test]
    fn single_step_transform_rebuilds_same_shape() {
        let steps: Vec<BoxedNav<Scalar>> = vec![Box::new(AllVec)];
        let cont = Cont::of(&steps);
        let structure = Value::vec([Value::int(1), Value::int(2)]);
        let frame = Frame::empty();
        let term: &TermFn<Scalar> = &|_vals, x| match x {
            Value::Scalar(Scalar::Int(i)) => Ok(Value::int(i + 1)),
            other => Ok(other),
        };
        let result = transform_from(&cont, structure, &frame, &[], term).unwrap();
        assert_eq!(result, Value::vec([Value::int(2), Value::int(3)]));
    }
}
