// ============================================================================
// Numeric Errors
// Error types for integer and floating-point arithmetic operations
// ============================================================================

use super::operation::Operation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message reported when `divide` receives a zero divisor.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is not allowed.";

/// Message reported when `modulo` receives a zero divisor.
pub const MODULO_BY_ZERO_MESSAGE: &str = "Modulo by zero is not allowed.";

/// Message reported when `square_root` receives a negative argument.
pub const NEGATIVE_SQUARE_ROOT_MESSAGE: &str = "Cannot calculate square root of negative number.";

/// The operations that take a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivisorOperation {
    Divide,
    Modulo,
}

impl DivisorOperation {
    pub const fn operation(&self) -> Operation {
        match self {
            DivisorOperation::Divide => Operation::Divide,
            DivisorOperation::Modulo => Operation::Modulo,
        }
    }
}

impl From<DivisorOperation> for Operation {
    fn from(op: DivisorOperation) -> Self {
        op.operation()
    }
}

/// Errors that can occur during arithmetic operations.
///
/// Only `divide` and `modulo` can fail with a zero divisor, and only
/// `square_root` can reject its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Divisor was zero
    DivisionByZero { operation: DivisorOperation },
    /// Negative square root argument
    InvalidArgument,
}

/// The two kinds of arithmetic failure, without the originating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    DivisionByZero,
    InvalidArgument,
}

impl NumericError {
    /// Zero divisor passed to `divide`.
    #[inline]
    pub const fn division_by_zero() -> Self {
        NumericError::DivisionByZero {
            operation: DivisorOperation::Divide,
        }
    }

    /// Zero divisor passed to `modulo`.
    #[inline]
    pub const fn modulo_by_zero() -> Self {
        NumericError::DivisionByZero {
            operation: DivisorOperation::Modulo,
        }
    }

    /// Negative argument passed to `square_root`.
    #[inline]
    pub const fn negative_square_root() -> Self {
        NumericError::InvalidArgument
    }

    /// Kind of failure.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            NumericError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            NumericError::InvalidArgument => ErrorKind::InvalidArgument,
        }
    }

    /// Operation that raised the error.
    #[inline]
    pub const fn operation(&self) -> Operation {
        match self {
            NumericError::DivisionByZero { operation } => operation.operation(),
            NumericError::InvalidArgument => Operation::SquareRoot,
        }
    }

    /// Exact, user-visible message text.
    pub const fn message(&self) -> &'static str {
        match self {
            NumericError::DivisionByZero {
                operation: DivisorOperation::Divide,
            } => DIVISION_BY_ZERO_MESSAGE,
            NumericError::DivisionByZero {
                operation: DivisorOperation::Modulo,
            } => MODULO_BY_ZERO_MESSAGE,
            NumericError::InvalidArgument => NEGATIVE_SQUARE_ROOT_MESSAGE,
        }
    }
}

impl ErrorKind {
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::InvalidArgument => "InvalidArgument",
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
