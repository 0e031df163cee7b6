use thiserror::Error;

use crate::term::TermKind;

/// Contract violations detected by the checked (`try_*`) term API.
///
/// The panicking accessors and constructors report the same conditions through `panic!` with
/// this type's message; nothing in the crate recovers from them internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("expected {expected} term, found {found} term")]
    KindMismatch {
        expected: &'static str,
        found: TermKind,
    },

    #[error("an application needs at least two children, got {0}")]
    AppArity(usize),

    #[error("argument index {index} is out of range for an application with {len} arguments")]
    ArgOutOfRange { index: usize, len: usize },
}

pub type TermResult<T> = Result<T, TermError>;

/// Unwrap a checked result, turning a contract violation into a panic at the caller.
#[track_caller]
#[inline]
pub(crate) fn contract<T>(result: TermResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
