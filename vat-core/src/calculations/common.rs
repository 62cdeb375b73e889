//! Shared rounding helpers for monetary calculations.
//!
//! Every figure that leaves the engine is rounded here so the whole crate
//! agrees on a single rounding rule.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vat_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds and rescales a value so it always carries exactly two fractional
/// digits.
///
/// [`round_half_up`] alone keeps the original scale for values that need no
/// rounding (`100` stays `100`), which would display without cents. Money
/// figures go through this instead so `100` becomes `100.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vat_core::calculations::common::to_money;
///
/// assert_eq!(to_money(dec!(100)).to_string(), "100.00");
/// assert_eq!(to_money(dec!(0.005)).to_string(), "0.01");
/// ```
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded
}
