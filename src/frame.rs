//! The late-bound parameter frame: a read-only slice plus a base offset, threaded
//! through execution so parameterized navigators can fetch their arguments by
//! position without the frame ever being mutated.

use crate::value::Value;

/// `params[base + offset + k]` is the k-th argument of the navigator whose
/// compiler-assigned offset is `offset`. Never mutated during a call; cheap to
/// pass by reference down every `select_step`/`transform_step`.
#[derive(Clone, Copy)]
pub struct Frame<'a, L> {
    pub params: &'a [Value<L>],
    pub base: usize,
}

impl<'a, L> Frame<'a, L> {
    pub fn empty() -> Frame<'static, L> {
        Frame { params: &[], base: 0 }
    }

    /// Fetch the k-th argument (0-indexed) of a navigator at `offset`.
    pub fn arg(&self, offset: usize, k: usize) -> &Value<L> {
        &self.params[self.base + offset + k]
    }
}

/// An argument to a parameterized navigator: either known at compile time
/// (`Const`, contributes zero slots) or deferred to the parameter frame
/// (`Late`, contributes one slot at the navigator's compiler-assigned offset).
#[derive(Clone)]
pub enum Arg<L> {
    Const(Value<L>),
    Late { offset: usize },
}

impl<L: Clone> Arg<L> {
    /// A late-bound argument with no sub-structure of its own, so its local
    /// offset is unset until the compiler's offset-assignment pass calls
    /// `assign_offset` with the cumulative slot count to this step's left.
    pub fn late_placeholder() -> Self {
        Arg::Late { offset: 0 }
    }

    pub fn slots(&self) -> usize {
        match self {
            Arg::Const(_) => 0,
            Arg::Late { .. } => 1,
        }
    }

    /// Set this argument's offset to the compiler's cumulative slot count,
    /// overwriting whatever was there before. `compile_paths`/`CompiledPath::
    /// offset_slots` always pass the full cumulative offset (not a delta), even
    /// when re-running the pass over an already-compiled inner path embedded in
    /// a composite (`Collect`, `Filterer`, `CondPath`, `MultiPath`,
    /// `Transformed`, `Selected`, ...) — so this must assign absolutely rather
    /// than accumulate, or a re-offset compounds into an out-of-bounds index.
    /// A no-op for `Const`.
    pub fn assign_offset(&mut self, offset: usize) {
        if let Arg::Late { offset: slot } = self {
            *slot = offset;
        }
    }

    pub fn resolve(&self, frame: &Frame<L>) -> Value<L> {
        match self {
            Arg::Const(v) => v.clone(),
            Arg::Late { offset } => frame.arg(*offset, 0).clone(),
        }
    }
}
