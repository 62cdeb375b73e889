//! VAT breakdown calculations.
//!
//! This module implements the two VAT directions a calculation can run in:
//!
//! | Direction  | Base amount              | VAT amount          | Total         |
//! |------------|--------------------------|---------------------|---------------|
//! | `Excluded` | amount                   | amount × rate/100   | base + VAT    |
//! | `Included` | amount / (1 + rate/100)  | total − base        | amount        |
//!
//! Each breakdown figure carries exactly two fractional digits. The two
//! independent figures are rounded half-away-from-zero and the third is
//! derived from them, so `base + VAT == total` holds exactly at the cent
//! level for every input.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vat_core::VatDirection;
//! use vat_core::calculations::calculate;
//!
//! let breakdown = calculate(dec!(100), dec!(18), VatDirection::Excluded).unwrap();
//!
//! assert_eq!(breakdown.base_amount, dec!(100.00));
//! assert_eq!(breakdown.vat_amount, dec!(18.00));
//! assert_eq!(breakdown.total, dec!(118.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::to_money;
use crate::models::VatDirection;

/// Errors that can occur when building a VAT breakdown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VatError {
    /// User text could not be interpreted as a numeric value.
    /// Raised at the input boundary by [`parse_input`], before the engine runs.
    #[error("invalid {field}: '{value}' is not a number")]
    InvalidInput {
        field: &'static str,
        value: String,
    },

    /// The VAT rate must be zero or positive.
    #[error("VAT rate must not be negative, got {0}")]
    NegativeRate(Decimal),
}

/// The three derived figures of a VAT calculation.
///
/// Every field is rescaled to exactly two fractional digits, so the values
/// are display-ready without further formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// The pre-tax monetary value.
    pub base_amount: Decimal,

    /// The VAT levied on the base amount.
    pub vat_amount: Decimal,

    /// Base amount plus VAT. Always equals `base_amount + vat_amount` exactly.
    pub total: Decimal,
}

/// Parses user text into a [`Decimal`] calculation input.
///
/// Trims whitespace and strips commas (thousands separator), so `"1,234.56"`
/// parses. Empty or non-numeric text is rejected with
/// [`VatError::InvalidInput`]; a rejected input must leave history untouched,
/// which callers get for free since the engine never runs.
pub fn parse_input(
    field: &'static str,
    text: &str,
) -> Result<Decimal, VatError> {
    let normalized = text.trim().replace(',', "");
    normalized.parse().map_err(|e| {
        warn!(field, input = %text, "rejected calculation input: {}", e);
        VatError::InvalidInput {
            field,
            value: text.trim().to_string(),
        }
    })
}

/// Calculates the VAT breakdown for an amount at the given rate.
///
/// With [`VatDirection::Excluded`] the amount is the pre-tax base and VAT is
/// added on top; with [`VatDirection::Included`] the amount is the gross
/// figure and VAT is extracted from it.
///
/// The rate is a percentage (`18` means 18%). The upper bound is a UI
/// convention and is not enforced here; negative amounts are permitted and
/// produce consistently negative figures.
///
/// Pure and deterministic; identity and timestamps are assigned by the
/// history store at record-creation time, never here.
///
/// # Errors
///
/// Returns [`VatError::NegativeRate`] when `rate` is below zero.
pub fn calculate(
    amount: Decimal,
    rate: Decimal,
    direction: VatDirection,
) -> Result<VatBreakdown, VatError> {
    if rate < Decimal::ZERO {
        return Err(VatError::NegativeRate(rate));
    }

    let factor = rate / Decimal::ONE_HUNDRED;

    let breakdown = match direction {
        VatDirection::Excluded => {
            let base_amount = to_money(amount);
            let vat_amount = to_money(amount * factor);
            VatBreakdown {
                base_amount,
                vat_amount,
                total: base_amount + vat_amount,
            }
        }
        VatDirection::Included => {
            // rate >= 0 keeps the divisor at 1 or above.
            let total = to_money(amount);
            let base_amount = to_money(amount / (Decimal::ONE + factor));
            VatBreakdown {
                base_amount,
                vat_amount: total - base_amount,
                total,
            }
        }
    };

    Ok(breakdown)
}
