use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of currencies the calculator supports.
///
/// Currencies are face-value units only; there is no conversion-rate logic
/// anywhere in the crate. Each entry carries its display symbol and the
/// Azerbaijani words for its major and minor units, used by the numeral
/// spelling converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Azn,
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// Canonical currency code, as shown next to amounts.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Azn => "AZN",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Rub => "RUB",
        }
    }

    /// Display symbol for UI dropdowns and labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Azn => "₼",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Rub => "₽",
        }
    }

    /// Azerbaijani word for the major currency unit.
    pub fn major_unit_word(&self) -> &'static str {
        match self {
            Self::Azn => "manat",
            Self::Usd => "dollar",
            Self::Eur => "avro",
            Self::Rub => "rubl",
        }
    }

    /// Azerbaijani word for the minor currency unit (hundredths).
    pub fn minor_unit_word(&self) -> &'static str {
        match self {
            Self::Azn => "qəpik",
            Self::Usd => "sent",
            Self::Eur => "sent",
            Self::Rub => "qəpik",
        }
    }

    /// Parses a currency code, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AZN" => Some(Self::Azn),
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "RUB" => Some(Self::Rub),
            _ => None,
        }
    }

    /// All supported currencies, in display order.
    pub fn all() -> [Currency; 4] {
        [Self::Azn, Self::Usd, Self::Eur, Self::Rub]
    }
}

impl fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.code())
    }
}
