use serde::{Deserialize, Serialize};

/// Whether the entered amount already contains VAT.
///
/// `Excluded` treats the amount as the pre-tax base and adds VAT on top;
/// `Included` treats it as the gross figure and extracts VAT from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatDirection {
    #[default]
    Excluded,
    Included,
}

impl VatDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::Included => "included",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "excluded" => Some(Self::Excluded),
            "included" => Some(Self::Included),
            _ => None,
        }
    }
}
