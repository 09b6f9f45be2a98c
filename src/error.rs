//! Crate-wide error type.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while building a grammar or running an interpretation pass.
///
/// Both pipeline stages are pure functions: once any of these is returned,
/// no partial output from the failed pass is valid.
#[derive(Debug, Error)]
pub enum VerdureError {
    /// A rewrite rule was keyed on a control symbol (`+ - & ^ \ / | [ ]`).
    /// Control symbols always pass through expansion literally, so such a
    /// rule could never fire.
    #[error("malformed grammar: {0}")]
    MalformedGrammar(String),

    /// A `]` was encountered with no matching `[` still on the state stack.
    /// The payload is the index of the offending symbol.
    #[error("unbalanced brackets: ']' at symbol index {0} with an empty state stack")]
    UnbalancedStateStack(usize),

    /// Negative step sizes have no turtle semantics. Zero is legal and
    /// produces coincident points.
    #[error("invalid step size {0}: step size must be non-negative")]
    InvalidStepSize(f32),

    /// A deadline-bounded pass exceeded its time budget.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
