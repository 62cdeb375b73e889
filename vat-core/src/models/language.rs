use serde::{Deserialize, Serialize};

/// Interface languages the calculator ships with.
///
/// Azerbaijani is the only language with long-form numeral spelling; the
/// others fall back to plain numeric formatting in the words converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Az,
    Ru,
}

impl Language {
    /// Lowercase BCP-47-style tag for the language.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Az => "az",
            Self::Ru => "ru",
        }
    }

    /// Parses a language tag, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "az" => Some(Self::Az),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_known_tags() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("AZ"), Some(Language::Az));
        assert_eq!(Language::parse(" ru "), Some(Language::Ru));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(Language::parse("tr"), None);
        assert_eq!(Language::parse(""), None);
    }
}
