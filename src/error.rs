//! Application-level error type.
//!
//! Exit code conventions:
//!
//! - 1: usage/validation errors (bad dates, non-positive numbers)
//! - 2: I/O and image-encoding failures
//! - 3: curve precondition violations surfacing at runtime (indicates a bug
//!   in the calling code, since the CLI validates inputs up front)

use crate::math::CurveError;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<CurveError> for AppError {
    fn from(err: CurveError) -> Self {
        AppError::new(3, err.to_string())
    }
}
