// ============================================================================
// Calculator
// Observable facade over the pure arithmetic core
// ============================================================================

use crate::domain::{Calculation, CalculationId, CalculatorConfig, Value};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{self, NumericError, NumericResult};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Calculator that reports every evaluation to an event handler.
///
/// Results are exactly those of the functions in [`crate::numeric`]; the
/// calculator only adds sequencing and event emission. It holds no lock
/// and can be shared freely between threads.
pub struct Calculator {
    /// Name, event switch and tolerance
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Sequence counter for evaluation ordering
    sequence_counter: AtomicU64,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
            sequence_counter: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Number of evaluations performed so far, including rejected ones
    pub fn evaluations(&self) -> u64 {
        self.sequence_counter.load(Ordering::Acquire)
    }

    /// Whether two real values agree within the configured tolerance
    pub fn approx_eq(&self, expected: f64, actual: f64) -> bool {
        (expected - actual).abs() <= self.config.tolerance
    }

    // ========================================================================
    // Operations
    // ========================================================================

    pub fn add(&self, a: i32, b: i32) -> i32 {
        let sum = numeric::add(a, b);
        self.observe(Calculation::Add(a, b), Ok(sum.into()));
        sum
    }

    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        let difference = numeric::subtract(a, b);
        self.observe(Calculation::Subtract(a, b), Ok(difference.into()));
        difference
    }

    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        let product = numeric::multiply(a, b);
        self.observe(Calculation::Multiply(a, b), Ok(product.into()));
        product
    }

    /// # Errors
    /// Returns `DivisionByZero` if `b` is zero.
    pub fn divide(&self, a: i32, b: i32) -> NumericResult<i32> {
        let quotient = numeric::divide(a, b);
        self.observe(Calculation::Divide(a, b), quotient.map(Value::from));
        quotient
    }

    /// # Errors
    /// Returns `DivisionByZero` if `b` is zero.
    pub fn modulo(&self, a: i32, b: i32) -> NumericResult<i32> {
        let remainder = numeric::modulo(a, b);
        self.observe(Calculation::Modulo(a, b), remainder.map(Value::from));
        remainder
    }

    /// # Errors
    /// Returns `InvalidArgument` if `x` is negative.
    pub fn square_root(&self, x: f64) -> NumericResult<f64> {
        let root = numeric::square_root(x);
        self.observe(Calculation::SquareRoot(x), root.map(Value::from));
        root
    }

    pub fn power(&self, base: i32, exponent: i32) -> f64 {
        let result = numeric::power(base, exponent);
        self.observe(Calculation::Power(base, exponent), Ok(result.into()));
        result
    }

    pub fn absolute_value(&self, a: i32) -> i32 {
        let result = numeric::absolute_value(a);
        self.observe(Calculation::AbsoluteValue(a), Ok(result.into()));
        result
    }

    /// Evaluate a calculation request
    pub fn evaluate(&self, calculation: Calculation) -> NumericResult<Value> {
        let outcome = calculation.apply();
        self.observe(calculation, outcome);
        outcome
    }

    /// Evaluate several requests, reporting their events as one batch
    pub fn evaluate_batch(&self, calculations: &[Calculation]) -> Vec<NumericResult<Value>> {
        let mut events = Vec::with_capacity(calculations.len());
        let outcomes: Vec<_> = calculations
            .iter()
            .map(|calculation| {
                let outcome = calculation.apply();
                if let Some(event) = self.next_event(*calculation, outcome) {
                    events.push(event);
                }
                outcome
            })
            .collect();

        if !events.is_empty() {
            self.event_handler.on_events(events);
        }
        outcomes
    }

    // ========================================================================
    // Event Emission
    // ========================================================================

    fn observe(&self, calculation: Calculation, outcome: Result<Value, NumericError>) {
        if let Some(event) = self.next_event(calculation, outcome) {
            self.event_handler.on_event(event);
        }
    }

    /// Assign the next sequence number and build the event, if enabled
    fn next_event(
        &self,
        calculation: Calculation,
        outcome: Result<Value, NumericError>,
    ) -> Option<CalculationEvent> {
        let sequence = self.sequence_counter.fetch_add(1, Ordering::AcqRel);
        if !self.config.emit_events {
            return None;
        }

        let event = match outcome {
            Ok(value) => CalculationEvent::Evaluated {
                id: CalculationId::new(),
                sequence,
                calculator: self.config.name.clone(),
                calculation,
                value,
                timestamp: Utc::now(),
            },
            Err(err) => CalculationEvent::Rejected {
                id: CalculationId::new(),
                sequence,
                calculator: self.config.name.clone(),
                calculation,
                kind: err.kind(),
                reason: err.message().to_string(),
                timestamp: Utc::now(),
            },
        };
        Some(event)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }
}
