// crates/aidp-core/src/core/integral.rs
// ============================================================================
// Module: Integral Wire Numbers
// Description: Serde adapters for unsigned counters written as JSON numbers.
// Purpose: Accept every value JSON Schema calls an integer, e.g. `2.0`.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! JSON Schema treats any number with a zero fractional part as an
//! `integer`, so `2.0` satisfies `{"type": "integer"}`. Plain serde
//! deserialization of `u32` rejects it. These adapters accept unsigned
//! integers, non-negative signed integers, and finite integral floats, then
//! narrow to the field's width. Use them with `deserialize_with`:
//!
//! - [`deserialize`] for required fields,
//! - [`option`] for `Option<T>` fields (pair with `#[serde(default)]`),
//! - [`map`] for `BTreeMap<String, T>` fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::Deserializer;
use serde::de;
use serde::de::Unexpected;
use serde::de::Visitor;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// 2^64; the first float strictly above every `u64`.
const U64_CEILING: f64 = 18_446_744_073_709_551_616.0;

// ============================================================================
// SECTION: Adapters
// ============================================================================

/// Deserializes a required unsigned integer.
///
/// # Errors
///
/// Fails for negative, fractional, non-finite, or out-of-range numbers.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Integral::<T>::deserialize(deserializer).map(|value| value.0)
}

/// Deserializes an optional unsigned integer; `null` maps to `None`.
///
/// # Errors
///
/// Fails under the same conditions as [`deserialize`].
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Option::<Integral<T>>::deserialize(deserializer).map(|value| value.map(|inner| inner.0))
}

/// Deserializes a string-keyed map of unsigned integers.
///
/// # Errors
///
/// Fails when any value fails [`deserialize`].
pub fn map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let raw = BTreeMap::<String, Integral<T>>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(key, value)| (key, value.0)).collect())
}

// ============================================================================
// SECTION: Visitor
// ============================================================================

/// Newtype carrying the narrowed value out of the visitor.
struct Integral<T>(T);

impl<'de, T: TryFrom<u64>> Deserialize<'de> for Integral<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntegralVisitor(PhantomData)).map(Integral)
    }
}

/// Visitor accepting any integral JSON number that fits `T`.
struct IntegralVisitor<T>(PhantomData<T>);

impl<T: TryFrom<u64>> Visitor<'_> for IntegralVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a non-negative integer within range")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        T::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        let unsigned = u64::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))?;
        self.visit_u64(unsigned)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp,
        reason = "Guarded: the float is finite, integral, and inside [0, 2^64)."
    )]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
        let integral = value.is_finite() && value.trunc() == value;
        if !integral || value < 0.0 || value >= U64_CEILING {
            return Err(E::invalid_value(Unexpected::Float(value), &self));
        }
        self.visit_u64(value as u64)
    }
}
