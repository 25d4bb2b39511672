/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Conversions from wire representations to domain values.
//!
//! Prices and quantities travel as `i64` mantissas scaled by a signed
//! exponent carried in the same message. Timestamps are microseconds since
//! the Unix epoch.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Largest scale `Decimal` can represent.
const MAX_SCALE: u32 = 28;

fn power_of_ten(exp: u32) -> Option<Decimal> {
    Decimal::try_from_i128_with_scale(10i128.checked_pow(exp)?, 0).ok()
}

/// Converts a mantissa and a base-10 exponent to a decimal.
///
/// # Arguments
/// * `mantissa` - Scaled integer value
/// * `exponent` - Power of ten applied to the mantissa
///
/// # Returns
/// `None` if the result does not fit a `Decimal`.
#[must_use]
pub fn mantissa_to_decimal(mantissa: i64, exponent: i8) -> Option<Decimal> {
    if exponent <= 0 {
        let scale = u32::from(exponent.unsigned_abs());
        if scale > MAX_SCALE {
            return None;
        }
        return Some(Decimal::new(mantissa, scale));
    }
    let factor = power_of_ten(u32::from(exponent.unsigned_abs()))?;
    Decimal::from(mantissa).checked_mul(factor)
}

/// Converts a decimal to a mantissa at the given exponent.
///
/// # Returns
/// `None` if the value cannot be represented exactly at that exponent or
/// does not fit an `i64`.
#[must_use]
pub fn decimal_to_mantissa(value: Decimal, exponent: i8) -> Option<i64> {
    let factor = power_of_ten(u32::from(exponent.unsigned_abs()))?;
    let shifted = if exponent <= 0 {
        value.checked_mul(factor)?
    } else {
        value.checked_div(factor)?
    };
    if !shifted.fract().is_zero() {
        return None;
    }
    i64::try_from(shifted.trunc()).ok()
}

/// Converts a microsecond timestamp to a UTC date time.
#[must_use]
pub fn timestamp_from_micros(micros: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
}
