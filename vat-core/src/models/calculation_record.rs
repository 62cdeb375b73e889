use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::VatBreakdown;
use crate::models::{Currency, VatDirection};

/// A completed calculation before identity is assigned.
///
/// Built from the user's inputs and the engine's breakdown; the history
/// store turns it into a [`CalculationRecord`] by assigning an id and a
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalculationRecord {
    /// The raw amount exactly as the user entered it, pre-calculation.
    pub amount: Decimal,
    /// The VAT percentage applied.
    pub rate: Decimal,
    pub direction: VatDirection,
    pub currency: Currency,
    pub base_amount: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
}

impl NewCalculationRecord {
    /// Bundles the user's inputs with the engine's breakdown.
    pub fn from_breakdown(
        amount: Decimal,
        rate: Decimal,
        direction: VatDirection,
        currency: Currency,
        breakdown: VatBreakdown,
    ) -> Self {
        Self {
            amount,
            rate,
            direction,
            currency,
            base_amount: breakdown.base_amount,
            vat_amount: breakdown.vat_amount,
            total: breakdown.total,
        }
    }
}

/// A calculation stored in the session history.
///
/// Immutable once created; owned by the history store until removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique within a session; assigned by the history store.
    pub id: i64,
    pub amount: Decimal,
    pub rate: Decimal,
    pub direction: VatDirection,
    pub currency: Currency,
    pub base_amount: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// One-line summary in the clipboard format:
    /// `"100.00 + 18.00 = 118.00 AZN (18%)"`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} + {} = {} {} ({}%)",
            self.base_amount,
            self.vat_amount,
            self.total,
            self.currency.code(),
            self.rate
        )
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Base amount: {} {}",
            self.base_amount,
            self.currency.code()
        )?;
        writeln!(
            f,
            "VAT ({}%):   {} {}",
            self.rate,
            self.vat_amount,
            self.currency.code()
        )?;
        write!(f, "Total:       {} {}", self.total, self.currency.code())
    }
}
