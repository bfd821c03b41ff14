// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `--features logging` to see the tracing output of each evaluation.

use calculator::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Example ===\n");

    let (forwarder, receiver) = ChannelEventHandler::unbounded();
    let calc = match CalculatorBuilder::new("demo")
        .event_handler(Arc::new(forwarder))
        .build()
    {
        Ok(calc) => calc,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            return;
        }
    };

    println!("2 + 3 = {}", calc.add(2, 3));
    println!("5 - 3 = {}", calc.subtract(5, 3));
    println!("4 * 3 = {}", calc.multiply(4, 3));
    println!("2 ^ 3 = {}", calc.power(2, 3));
    println!("|-7| = {}", calc.absolute_value(-7));

    for (a, b) in [(10, 2), (10, 0)] {
        match calc.divide(a, b) {
            Ok(q) => println!("{} / {} = {}", a, b, q),
            Err(err) => println!("{} / {} failed: {}", a, b, err),
        }
    }

    for x in [16.0, -4.0] {
        match calc.square_root(x) {
            Ok(root) => println!("sqrt({}) = {}", x, root),
            Err(err) => println!("sqrt({}) failed: {} ({})", x, err, err.kind()),
        }
    }

    println!("\n=== Batch ===");
    let batch = [
        Calculation::Modulo(10, 3),
        Calculation::Modulo(6, 0),
        Calculation::Divide(i32::MIN, -1),
    ];
    for (calculation, outcome) in batch.iter().zip(calc.evaluate_batch(&batch)) {
        match outcome {
            Ok(value) => println!("  {} = {}", calculation, value),
            Err(err) => println!("  {} -> {}", calculation, err),
        }
    }

    println!("\n=== Events ===");
    for event in receiver.try_iter() {
        match event {
            CalculationEvent::Evaluated {
                sequence,
                calculation,
                value,
                ..
            } => println!("  #{} {} = {}", sequence, calculation, value),
            CalculationEvent::Rejected {
                sequence,
                calculation,
                kind,
                reason,
                ..
            } => println!("  #{} {} rejected ({}): {}", sequence, calculation, kind, reason),
        }
    }

    println!("\nTotal evaluations: {}", calc.evaluations());
}
