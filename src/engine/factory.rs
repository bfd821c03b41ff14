// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for evaluation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or validation error
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new("desk");
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.add(2, 3), 5);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator::prelude::*;
///
/// let calc = CalculatorBuilder::new("desk")
///     .with_logging()
///     .with_tolerance(1e-6)
///     .build()
///     .unwrap();
/// assert_eq!(calc.divide(10, 2), Ok(5));
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    /// Create a new builder for a calculator with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(name),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the event handler
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Report evaluations through `tracing`
    pub fn with_logging(self) -> Self {
        self.event_handler(Arc::new(LoggingEventHandler))
    }

    /// Disable event emission
    pub fn silent(mut self) -> Self {
        self.config.emit_events = false;
        self
    }

    /// Set comparison tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Result<Calculator, String> {
        create_from_config(self.config, self.event_handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_NAME)
    }
}

impl Calculator {
    /// Start building a calculator with default settings
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::default()
    }
}
