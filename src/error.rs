use thiserror::Error;

/// Every way a math kernel operation can refuse its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A zero denominator, a singular `Matrix33`, or a zero rational divisor.
    #[error("attempt to divide by zero")]
    DivideByZero,

    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected {expected} elements but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot build an orthogonal vector from the zero vector")]
    ZeroVector,

    #[error("value is not finite")]
    NotFinite,

    #[error("value does not fit the target representation")]
    Overflow,

    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience definition for results carrying a [`MathError`].
pub type MathResult<T> = Result<T, MathError>;

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> MathResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len })
    }
}
