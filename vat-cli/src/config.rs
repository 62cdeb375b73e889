//! Optional TOML configuration for session defaults.
//!
//! A missing file is not an error: the calculator runs with built-in
//! defaults matching the original presets (18% rate, AZN, English labels,
//! quick rates 10/18/20). A present-but-malformed file is an error, so a
//! typo never silently reverts settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use vat_core::{Currency, Language};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Interface language for labels and word spelling.
    pub language: Language,

    /// Currency new calculations are tagged with.
    pub currency: Currency,

    /// VAT percentage used when a calculation does not name one.
    pub default_rate: Decimal,

    /// Preset rates offered by the `rates` command.
    pub quick_rates: Vec<Decimal>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            currency: Currency::Azn,
            default_rate: Decimal::from(18),
            quick_rates: vec![Decimal::from(10), Decimal::from(18), Decimal::from(20)],
        }
    }
}

/// Loads configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CliConfig::default());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file '{}'", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;

    Ok(config)
}
