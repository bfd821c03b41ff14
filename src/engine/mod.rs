// ============================================================================
// Engine Module
// Contains the observable calculator built on the numeric core
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
