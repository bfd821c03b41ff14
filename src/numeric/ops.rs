// ============================================================================
// Arithmetic Operations
// Pure integer and floating-point operations over machine numeric types
// ============================================================================

use super::errors::{NumericError, NumericResult};

// ============================================================================
// Integer Operations
// ============================================================================

/// Sum of two integers, wrapping around on overflow.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Difference of two integers, wrapping around on overflow.
#[inline]
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Product of two integers, wrapping around on overflow.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Integer quotient, truncated toward zero.
///
/// `divide(i32::MIN, -1)` wraps to `i32::MIN`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
#[inline]
pub const fn divide(a: i32, b: i32) -> NumericResult<i32> {
    if b == 0 {
        return Err(NumericError::division_by_zero());
    }
    Ok(a.wrapping_div(b))
}

/// Remainder of truncating division; the sign follows the dividend.
///
/// `modulo(i32::MIN, -1)` is `0`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero.
#[inline]
pub const fn modulo(a: i32, b: i32) -> NumericResult<i32> {
    if b == 0 {
        return Err(NumericError::modulo_by_zero());
    }
    Ok(a.wrapping_rem(b))
}

/// Absolute value; `i32::MIN` wraps to itself.
#[inline]
pub const fn absolute_value(a: i32) -> i32 {
    a.wrapping_abs()
}

// ============================================================================
// Floating-Point Operations
// ============================================================================

/// Non-negative square root.
///
/// The sign is checked before calling `f64::sqrt`, which would otherwise
/// return NaN. `-0.0` and NaN are not less than zero and pass through.
///
/// # Errors
/// Returns `InvalidArgument` if `x` is negative.
#[inline]
pub fn square_root(x: f64) -> NumericResult<f64> {
    if x < 0.0 {
        return Err(NumericError::negative_square_root());
    }
    Ok(x.sqrt())
}

/// `base` raised to `exponent`, computed in double precision.
///
/// Negative exponents yield the reciprocal; `power(0, -1)` is `+inf`.
#[inline]
pub fn power(base: i32, exponent: i32) -> f64 {
    f64::from(base).powf(f64::from(exponent))
}

// ============================================================================
// Tests
// ============================================================================
