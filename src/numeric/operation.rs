// ============================================================================
// Operations
// The closed set of arithmetic operations and their metadata
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    SquareRoot,
    Power,
    AbsoluteValue,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::SquareRoot,
        Operation::Power,
        Operation::AbsoluteValue,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::SquareRoot => "square_root",
            Operation::Power => "power",
            Operation::AbsoluteValue => "absolute_value",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Modulo => "%",
            Operation::SquareRoot => "sqrt",
            Operation::Power => "^",
            Operation::AbsoluteValue => "abs",
        }
    }

    /// Number of operands the operation takes.
    pub const fn arity(&self) -> usize {
        match self {
            Operation::SquareRoot | Operation::AbsoluteValue => 1,
            _ => 2,
        }
    }

    /// Whether the operation can return an error.
    pub const fn is_fallible(&self) -> bool {
        matches!(
            self,
            Operation::Divide | Operation::Modulo | Operation::SquareRoot
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_metadata() {
        assert_eq!(Operation::ALL.len(), 8);
        assert_eq!(Operation::SquareRoot.arity(), 1);
        assert_eq!(Operation::Divide.arity(), 2);
        assert!(Operation::Modulo.is_fallible());
        assert!(!Operation::Power.is_fallible());
        assert_eq!(Operation::AbsoluteValue.to_string(), "absolute_value");
    }

    #[test]
    fn test_fallible_operations() {
        let fallible: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.is_fallible())
            .collect();
        assert_eq!(
            fallible,
            vec![&Operation::Divide, &Operation::Modulo, &Operation::SquareRoot]
        );
    }
}
