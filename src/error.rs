//! Error conditions exposed at the path/engine boundary.
//!
//! Ported in spirit from `gram-codec`'s `parser::error::ParseError`: one
//! `thiserror`-derived variant per condition, each carrying enough context to
//! render a useful message without the caller reconstructing it.

use thiserror::Error;

/// Every error this crate can produce, from compiling a path through running it.
#[derive(Debug, Error)]
pub enum PathError {
    /// `select_one`/`select_one_exact`/`collect_one` saw more results than allowed.
    #[error("cardinality violation in {context}: expected {expected}, found {found}")]
    Cardinality {
        context: String,
        expected: String,
        found: usize,
    },

    /// A navigator met a container shape it cannot operate on.
    #[error("shape mismatch: {navigator} cannot operate on a {found_shape}")]
    ShapeMismatch {
        navigator: String,
        found_shape: String,
    },

    /// A path built with late-bound parameter slots was executed without being
    /// bound via `bind_params` first.
    #[error("unbound parameter: path declares {slots} late-bound slot(s) but was never bound")]
    UnboundParameter { slots: usize },

    /// `filterer`'s continuation returned a sequence of the wrong length.
    #[error("arity mismatch in filterer: expected {expected} replacement(s), found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// A user-supplied transform or predicate failed; the message is whatever the
    /// user function produced, propagated unchanged.
    #[error("user function failed: {message}")]
    UserFn { message: String },
}

impl PathError {
    pub fn shape_mismatch(navigator: impl Into<String>, found_shape: impl Into<String>) -> Self {
        PathError::ShapeMismatch {
            navigator: navigator.into(),
            found_shape: found_shape.into(),
        }
    }

    pub fn user_fn(message: impl Into<String>) -> Self {
        PathError::UserFn {
            message: message.into(),
        }
    }
}
