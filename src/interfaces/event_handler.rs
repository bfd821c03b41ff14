// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator evaluations
// ============================================================================

use crate::domain::{Calculation, CalculationId, Value};
use crate::numeric::{ErrorKind, Operation};
use chrono::{DateTime, Utc};
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Calculation produced a value
    Evaluated {
        id: CalculationId,
        sequence: u64,
        calculator: String,
        calculation: Calculation,
        value: Value,
        timestamp: DateTime<Utc>,
    },

    /// Calculation failed its precondition
    Rejected {
        id: CalculationId,
        sequence: u64,
        calculator: String,
        calculation: Calculation,
        kind: ErrorKind,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub fn id(&self) -> CalculationId {
        match self {
            CalculationEvent::Evaluated { id, .. } | CalculationEvent::Rejected { id, .. } => *id,
        }
    }

    pub fn sequence(&self) -> u64 {
        match self {
            CalculationEvent::Evaluated { sequence, .. }
            | CalculationEvent::Rejected { sequence, .. } => *sequence,
        }
    }

    pub fn calculation(&self) -> &Calculation {
        match self {
            CalculationEvent::Evaluated { calculation, .. }
            | CalculationEvent::Rejected { calculation, .. } => calculation,
        }
    }

    pub fn operation(&self) -> Operation {
        self.calculation().operation()
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, CalculationEvent::Rejected { .. })
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, forwarding, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Evaluated {
                sequence,
                calculator,
                calculation,
                value,
                ..
            } => {
                tracing::debug!(
                    calculator = %calculator,
                    sequence,
                    operation = %calculation.operation(),
                    %calculation,
                    %value,
                    "calculation evaluated"
                );
            }
            CalculationEvent::Rejected {
                sequence,
                calculator,
                calculation,
                kind,
                reason,
                ..
            } => {
                tracing::warn!(
                    calculator = %calculator,
                    sequence,
                    operation = %calculation.operation(),
                    %calculation,
                    %kind,
                    "calculation rejected: {}",
                    reason
                );
            }
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<CalculationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}

/// Forwards events to a channel consumer
pub struct ChannelEventHandler {
    sender: Sender<CalculationEvent>,
}

impl ChannelEventHandler {
    pub fn new(sender: Sender<CalculationEvent>) -> Self {
        Self { sender }
    }

    /// Handler backed by a fresh unbounded channel
    pub fn unbounded() -> (Self, Receiver<CalculationEvent>) {
        let (sender, receiver) = channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl EventHandler for ChannelEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        // Disconnected receivers are not an error for the calculator
        if self.sender.send(event).is_err() {
            tracing::trace!("calculation event dropped: receiver disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(sequence: u64) -> CalculationEvent {
        CalculationEvent::Evaluated {
            id: CalculationId::new(),
            sequence,
            calculator: "test".to_string(),
            calculation: Calculation::Add(2, 3),
            value: Value::Integer(5),
            timestamp: Utc::now(),
        }
    }

    fn rejected(sequence: u64) -> CalculationEvent {
        CalculationEvent::Rejected {
            id: CalculationId::new(),
            sequence,
            calculator: "test".to_string(),
            calculation: Calculation::Divide(10, 0),
            kind: ErrorKind::DivisionByZero,
            reason: "Division by zero is not allowed.".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(evaluated(0));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![evaluated(0), rejected(1)]);
    }

    #[test]
    fn test_event_accessors() {
        let event = rejected(7);
        assert_eq!(event.sequence(), 7);
        assert_eq!(event.operation(), Operation::Divide);
        assert_eq!(event.calculation(), &Calculation::Divide(10, 0));
        assert!(event.is_rejected());
        assert!(!evaluated(0).is_rejected());
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_event(evaluated(0));
        handler.on_events(vec![evaluated(1), rejected(2)]);
        assert_eq!(handler.len(), 3);

        let sequences: Vec<u64> = handler.events().iter().map(|e| e.sequence()).collect();
        assert_eq!(sequences, vec![0, 1, 2]);

        let drained = handler.drain();
        assert_eq!(drained.len(), 3);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_channel_handler() {
        let (handler, receiver) = ChannelEventHandler::unbounded();
        handler.on_event(evaluated(0));
        handler.on_event(rejected(1));

        let received: Vec<_> = receiver.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(received[1].is_rejected());
    }

    #[test]
    fn test_channel_handler_disconnected() {
        let (handler, receiver) = ChannelEventHandler::unbounded();
        drop(receiver);
        handler.on_event(evaluated(0));
        // Should not panic
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_event_json() {
        let event = rejected(3);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: CalculationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
