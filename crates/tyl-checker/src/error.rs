//! Failures of the checker. They are values threaded through [Result] and the first one found
//! stops the traversal.

use thiserror::Error;
use tyl_location::ByteRange;

use crate::types::Type;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeErrorKind {
    #[error("unbound variable '{0}'")]
    UnboundVariable(String),

    #[error("primitive not yet implemented: {0}")]
    UnimplementedPrimitive(String),

    #[error("test of if must be a boolean but found '{found}' in {expr}")]
    TestNotBoolean { found: Type, expr: String },

    #[error("incompatible types '{left}' and '{right}' in {expr}")]
    Incompatible {
        left: Type,
        right: Type,
        expr: String,
    },

    #[error("application of non-procedure '{found}' in {expr}")]
    NonProcedure { found: Type, expr: String },

    #[error("wrong number of arguments, expected {expected} but found {found} in {expr}")]
    ArityMismatch {
        expected: usize,
        found: usize,
        expr: String,
    },

    #[error("letrec only supports binding of procedures: {0}")]
    LetrecNonProcedure(String),

    #[error("unexpected empty list of expressions")]
    EmptySequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub location: ByteRange,
}

impl From<TypeError> for tyl_error::Error {
    fn from(err: TypeError) -> Self {
        Self::new(err.kind.to_string(), err.location)
    }
}
