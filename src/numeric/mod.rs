// ============================================================================
// Numeric Module
// Pure arithmetic over machine integers and doubles
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide/modulo/absolute_value over i32
// - square_root/power producing f64
// - Operation: the closed set of supported operations
// - NumericError: Error type for arithmetic operations
//
// Design principles:
// - Every operation is a pure function of its arguments
// - Integer overflow wraps around, division never traps
// - Fallible operations return Result (no panics), checked before computing
// - No logging, no allocation, no shared state

mod errors;
mod operation;
mod ops;

pub use errors::{
    DivisorOperation, ErrorKind, NumericError, NumericResult, DIVISION_BY_ZERO_MESSAGE,
    MODULO_BY_ZERO_MESSAGE, NEGATIVE_SQUARE_ROOT_MESSAGE,
};
pub use operation::Operation;
pub use ops::{absolute_value, add, divide, modulo, multiply, power, square_root, subtract};
