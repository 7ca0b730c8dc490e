//! Mathematical core: exponential-sum curve generation and view normalization.

pub mod expsum;
pub mod viewport;

pub use expsum::*;
pub use viewport::*;

/// Precondition violations of the math core.
///
/// These are deterministic misuse errors, not transient failures: retrying
/// with the same input cannot succeed, and silently clamping the input would
/// produce a visually wrong curve. They propagate to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A tuple element is zero or negative (or the tuple is empty).
    InvalidParameter { index: usize, value: Option<i64> },
    /// The view normalizer was given no points.
    EmptyCurve,
    /// The least common multiple of the tuple does not fit in a `u64`.
    LcmOverflow,
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidParameter {
                index,
                value: Some(value),
            } => write!(
                f,
                "Invalid curve parameter at position {index}: {value} (only positive integers allowed)."
            ),
            CurveError::InvalidParameter { .. } => {
                write!(f, "Curve parameters must contain at least one value.")
            }
            CurveError::EmptyCurve => write!(f, "Cannot compute a viewport for an empty curve."),
            CurveError::LcmOverflow => {
                write!(f, "Least common multiple of the parameters overflows u64.")
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// Validate a parameter tuple: non-empty, every element positive.
pub fn check_params(params: &[i64]) -> Result<(), CurveError> {
    if params.is_empty() {
        return Err(CurveError::InvalidParameter {
            index: 0,
            value: None,
        });
    }
    for (index, &value) in params.iter().enumerate() {
        if value <= 0 {
            return Err(CurveError::InvalidParameter {
                index,
                value: Some(value),
            });
        }
    }
    Ok(())
}
