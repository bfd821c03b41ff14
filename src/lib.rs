// ============================================================================
// Calculator Library
// Pure arithmetic with typed errors and observable evaluations
// ============================================================================

//! # Calculator
//!
//! Integer and floating-point arithmetic over machine numeric types.
//!
//! ## Features
//!
//! - **Pure operations**: add, subtract, multiply, divide, modulo, square
//!   root, power and absolute value, free of state and side effects
//! - **Wraparound integers**: `i32` overflow wraps, division never traps
//! - **Typed errors** carrying the exact message text callers match on
//! - **Evaluation events** for logging, auditing or forwarding, through a
//!   pluggable [`EventHandler`](interfaces::EventHandler)
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//! use std::sync::Arc;
//!
//! // Pure functions
//! assert_eq!(calculator::numeric::add(2, 3), 5);
//! assert_eq!(
//!     calculator::numeric::divide(10, 0).unwrap_err().to_string(),
//!     "Division by zero is not allowed."
//! );
//!
//! // Observable calculator
//! let events = Arc::new(RecordingEventHandler::new());
//! let calc = Calculator::new(CalculatorConfig::new("desk"), events.clone());
//!
//! assert_eq!(calc.modulo(10, 3), Ok(1));
//! assert!(calc.square_root(-4.0).is_err());
//! assert_eq!(events.len(), 2);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculationId, CalculatorConfig, Operation, Value};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CalculationEvent, ChannelEventHandler, EventHandler, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{ErrorKind, NumericError, NumericResult};
}
