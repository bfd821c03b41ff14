// ============================================================================
// Calculator Configuration
// Naming, event emission and comparison tolerance for a calculator instance
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute tolerance used when comparing real-valued results.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Name given to calculators built without an explicit configuration.
pub const DEFAULT_NAME: &str = "calculator";

/// Configuration for a [`Calculator`](crate::engine::Calculator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name reported in every event and log line
    pub name: String,

    /// Whether evaluations are reported to the event handler
    pub emit_events: bool,

    /// Absolute tolerance for `Calculator::approx_eq`
    pub tolerance: f64,
}

impl CalculatorConfig {
    /// Create a new configuration with the given name and default settings
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emit_events: true,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Configuration that never reports evaluations
    pub fn silent(name: impl Into<String>) -> Self {
        Self::new(name).with_emit_events(false)
    }

    /// Builder method: Enable or disable event emission
    pub fn with_emit_events(mut self, emit_events: bool) -> Self {
        self.emit_events = emit_events;
        self
    }

    /// Builder method: Set comparison tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Calculator name cannot be empty".to_string());
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("Tolerance must be a positive finite number".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CalculatorConfig::new("desk");

        assert_eq!(config.name, "desk");
        assert!(config.emit_events);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::default()
            .with_emit_events(false)
            .with_tolerance(1e-9);

        assert_eq!(config.name, DEFAULT_NAME);
        assert!(!config.emit_events);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::new("").validate().is_err());
        assert!(CalculatorConfig::new("   ").validate().is_err());
        assert!(CalculatorConfig::new("x")
            .with_tolerance(0.0)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new("x")
            .with_tolerance(-1e-4)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new("x")
            .with_tolerance(f64::NAN)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new("x")
            .with_tolerance(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let silent = CalculatorConfig::silent("batch");
        assert!(!silent.emit_events);
        assert!(silent.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json() {
        let config = CalculatorConfig::silent("batch");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
