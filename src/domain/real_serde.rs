// ============================================================================
// Real Number Serialization
// Lossless serde encoding for f64 payloads, including inf and NaN
// ============================================================================
//
// Finite values are written as plain numbers. Non-finite values, which JSON
// cannot represent, are written as the strings "inf", "-inf" and "NaN".
//
// Usage:
// ```ignore
// #[serde(with = "crate::domain::real_serde")]
// value: f64,
// ```

use serde::{de, Deserializer, Serializer};
use std::fmt;

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";
const NAN: &str = "NaN";

/// Serializes an `f64`, encoding non-finite values as strings.
///
/// This function can be used with `serde_derive`'s `with` and
/// `serialize_with` annotations.
pub fn serialize<S>(value: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        s.serialize_f64(*value)
    } else if value.is_nan() {
        s.serialize_str(NAN)
    } else if value.is_sign_positive() {
        s.serialize_str(INFINITY)
    } else {
        s.serialize_str(NEG_INFINITY)
    }
}

/// Deserializes an `f64` written by [`serialize`].
///
/// This function can be used with `serde_derive`'s `with` and
/// `deserialize_with` annotations.
pub fn deserialize<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct V;

    impl<'de2> de::Visitor<'de2> for V {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"inf\", \"-inf\" or \"NaN\"")
        }

        fn visit_f64<E>(self, v: f64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_u64<E>(self, v: u64) -> Result<f64, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_str<E>(self, v: &str) -> Result<f64, E>
        where
            E: de::Error,
        {
            match v {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    d.deserialize_any(V)
}
