// ============================================================================
// Operation Domain Model
// ============================================================================

use crate::numeric::{self, NumericResult, Operation};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result payload of an evaluated calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Integer(i32),
    Real(
        #[cfg_attr(feature = "serde", serde(with = "crate::domain::real_serde"))]
        f64,
    ),
}

impl Value {
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::Real(_) => None,
        }
    }

    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            Value::Integer(_) => None,
        }
    }

    /// Widen to f64 regardless of representation.
    pub fn to_f64(self) -> f64 {
        match self {
            Value::Integer(v) => f64::from(v),
            Value::Real(v) => v,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
        }
    }
}

// ============================================================================
// Calculation Request
// ============================================================================

/// A single operation together with its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calculation {
    Add(i32, i32),
    Subtract(i32, i32),
    Multiply(i32, i32),
    Divide(i32, i32),
    Modulo(i32, i32),
    SquareRoot(
        #[cfg_attr(feature = "serde", serde(with = "crate::domain::real_serde"))]
        f64,
    ),
    Power(i32, i32),
    AbsoluteValue(i32),
}

impl Calculation {
    pub const fn operation(&self) -> Operation {
        match self {
            Calculation::Add(..) => Operation::Add,
            Calculation::Subtract(..) => Operation::Subtract,
            Calculation::Multiply(..) => Operation::Multiply,
            Calculation::Divide(..) => Operation::Divide,
            Calculation::Modulo(..) => Operation::Modulo,
            Calculation::SquareRoot(_) => Operation::SquareRoot,
            Calculation::Power(..) => Operation::Power,
            Calculation::AbsoluteValue(_) => Operation::AbsoluteValue,
        }
    }

    /// Evaluate with the pure arithmetic core.
    pub fn apply(&self) -> NumericResult<Value> {
        match *self {
            Calculation::Add(a, b) => Ok(numeric::add(a, b).into()),
            Calculation::Subtract(a, b) => Ok(numeric::subtract(a, b).into()),
            Calculation::Multiply(a, b) => Ok(numeric::multiply(a, b).into()),
            Calculation::Divide(a, b) => numeric::divide(a, b).map(Value::from),
            Calculation::Modulo(a, b) => numeric::modulo(a, b).map(Value::from),
            Calculation::SquareRoot(x) => numeric::square_root(x).map(Value::from),
            Calculation::Power(base, exponent) => Ok(numeric::power(base, exponent).into()),
            Calculation::AbsoluteValue(a) => Ok(numeric::absolute_value(a).into()),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operation().symbol();
        match *self {
            Calculation::Add(a, b)
            | Calculation::Subtract(a, b)
            | Calculation::Multiply(a, b)
            | Calculation::Divide(a, b)
            | Calculation::Modulo(a, b)
            | Calculation::Power(a, b) => write!(f, "{} {} {}", a, symbol, b),
            Calculation::SquareRoot(x) => write!(f, "{}({})", symbol, x),
            Calculation::AbsoluteValue(a) => write!(f, "{}({})", symbol, a),
        }
    }
}
