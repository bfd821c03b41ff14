use calculator::numeric::{
    add, divide, modulo, multiply, square_root, subtract, ErrorKind, DIVISION_BY_ZERO_MESSAGE,
    MODULO_BY_ZERO_MESSAGE, NEGATIVE_SQUARE_ROOT_MESSAGE,
};
use calculator::prelude::*;
use proptest::prelude::*;

// Property 1: Addition is commutative (a + b == b + a)
proptest! {
    #[test]
    fn prop_addition_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }
}

// Property 2: Subtraction is anti-symmetric (a - b == -(b - a)), wrapping
proptest! {
    #[test]
    fn prop_subtraction_antisymmetric(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(subtract(a, b), subtract(b, a).wrapping_neg());
    }
}

// Property 3: Division-remainder identity under truncation toward zero
proptest! {
    #[test]
    fn prop_division_remainder_identity(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0)
    ) {
        let q = divide(a, b).unwrap();
        let r = modulo(a, b).unwrap();
        prop_assert_eq!(add(multiply(q, b), r), a);

        // Remainder is smaller than the divisor and takes the dividend's sign
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
        prop_assert!(r == 0 || (r < 0) == (a < 0));
    }
}

// Property 4: Zero divisors are always rejected with the exact message
proptest! {
    #[test]
    fn prop_zero_divisor_rejected(a in any::<i32>()) {
        let err = divide(a, 0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        prop_assert_eq!(err.to_string(), DIVISION_BY_ZERO_MESSAGE);

        let err = modulo(a, 0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        prop_assert_eq!(err.to_string(), MODULO_BY_ZERO_MESSAGE);
    }
}

// Property 5: Square root squares back to its input
proptest! {
    #[test]
    fn prop_square_root_inverse(x in 0.0f64..1.0e12) {
        let root = square_root(x).unwrap();
        prop_assert!(root >= 0.0);

        let diff = (root * root - x).abs();
        prop_assert!(
            diff <= 1e-4 * x.max(1.0),
            "sqrt({})^2 = {} (diff: {})",
            x, root * root, diff
        );
    }
}

// Property 6: Negative inputs never reach the square root primitive
proptest! {
    #[test]
    fn prop_square_root_negative_rejected(x in -1.0e12f64..-1.0e-12) {
        let err = square_root(x).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(err.to_string(), NEGATIVE_SQUARE_ROOT_MESSAGE);
    }
}

// Property 7: The calculator facade returns exactly what the pure core returns
proptest! {
    #[test]
    fn prop_calculator_matches_core(a in any::<i32>(), b in -3i32..3) {
        let calc = Calculator::default();

        prop_assert_eq!(calc.add(a, b), add(a, b));
        prop_assert_eq!(calc.subtract(a, b), subtract(a, b));
        prop_assert_eq!(calc.multiply(a, b), multiply(a, b));
        prop_assert_eq!(calc.divide(a, b), divide(a, b));
        prop_assert_eq!(calc.modulo(a, b), modulo(a, b));
        prop_assert_eq!(calc.evaluations(), 5);
    }
}
