// ============================================================================
// Domain Models Module
// Contains operations, calculation requests and configuration
// ============================================================================

pub mod config;
pub mod operation;

#[cfg(feature = "serde")]
pub mod real_serde;

pub use config::{CalculatorConfig, DEFAULT_NAME, DEFAULT_TOLERANCE};
pub use operation::{Calculation, CalculationId, Value};

// Operations are defined by the numeric core
pub use crate::numeric::Operation;
