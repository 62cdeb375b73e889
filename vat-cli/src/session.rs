//! Interactive session state and command execution.
//!
//! The command parser and executor are pure with respect to I/O: a command
//! comes in as a line of text, execution returns the text to print. The
//! read-print loop in `main.rs` is the only place that touches stdin and
//! stdout, which keeps every session behaviour testable.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;
use vat_core::history::HistoryStore;
use vat_core::{
    CalculationRecord, Currency, Language, NewCalculationRecord, VatDirection, VatError,
    calculate, parse_input,
};

use crate::config::CliConfig;
use crate::i18n::Labels;
use crate::render;

/// Errors from turning a line of input into a [`Command`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line; the loop ignores it silently.
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    MissingArgument(&'static str),

    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `calc <amount> [rate]`: run a calculation with the session
    /// direction and currency; the session rate applies when none is given.
    Calc {
        amount: String,
        rate: Option<String>,
    },
    /// `rate <value>`: change the session VAT percentage.
    Rate(String),
    /// `included` / `excluded`: change the calculation direction.
    Direction(VatDirection),
    /// `currency <code>`
    SetCurrency(String),
    /// `lang <tag>`
    SetLanguage(String),
    /// `words on|off`
    Words(bool),
    /// `history`: list stored calculations, newest first.
    History,
    /// `export`: raw summary lines for piping elsewhere.
    Export,
    /// `copy <id>`: print one record's clipboard line.
    Copy(i64),
    /// `remove <id>`
    Remove(i64),
    /// `clear`: empty the history.
    Clear,
    /// `reset`: restore the default rate and drop the last result;
    /// history is kept.
    Reset,
    /// `rates`: show the preset percentages.
    Rates,
    Help,
    Quit,
}

impl Command {
    /// Parses one line of user input.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?;

        match keyword {
            "calc" => {
                let amount = tokens
                    .next()
                    .ok_or(CommandError::MissingArgument("calc <amount> [rate]"))?
                    .to_string();
                let rate = tokens.next().map(str::to_string);
                Ok(Command::Calc { amount, rate })
            }
            "rate" => tokens
                .next()
                .map(|r| Command::Rate(r.to_string()))
                .ok_or(CommandError::MissingArgument("rate <value>")),
            "included" => Ok(Command::Direction(VatDirection::Included)),
            "excluded" => Ok(Command::Direction(VatDirection::Excluded)),
            "currency" => tokens
                .next()
                .map(|c| Command::SetCurrency(c.to_string()))
                .ok_or(CommandError::MissingArgument("currency <code>")),
            "lang" => tokens
                .next()
                .map(|l| Command::SetLanguage(l.to_string()))
                .ok_or(CommandError::MissingArgument("lang en|az|ru")),
            "words" => match tokens.next() {
                Some("on") => Ok(Command::Words(true)),
                Some("off") => Ok(Command::Words(false)),
                _ => Err(CommandError::MissingArgument("words on|off")),
            },
            "history" => Ok(Command::History),
            "export" => Ok(Command::Export),
            "copy" => parse_id(tokens.next(), "copy <id>").map(Command::Copy),
            "remove" => parse_id(tokens.next(), "remove <id>").map(Command::Remove),
            "clear" => Ok(Command::Clear),
            "reset" => Ok(Command::Reset),
            "rates" => Ok(Command::Rates),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(
    token: Option<&str>,
    usage: &'static str,
) -> Result<i64, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(usage))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidId(token.to_string()))
}

/// Per-session settings plus the calculation history.
#[derive(Debug)]
pub struct Session {
    pub language: Language,
    pub currency: Currency,
    pub rate: Decimal,
    pub direction: VatDirection,
    pub show_in_words: bool,
    pub last_result: Option<CalculationRecord>,
    pub history: HistoryStore,
    default_rate: Decimal,
    quick_rates: Vec<Decimal>,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            language: config.language,
            currency: config.currency,
            rate: config.default_rate,
            direction: VatDirection::Excluded,
            show_in_words: false,
            last_result: None,
            history: HistoryStore::new(),
            default_rate: config.default_rate,
            quick_rates: config.quick_rates.clone(),
        }
    }

    fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language)
    }

    /// Executes one command and returns the text to print.
    ///
    /// A failed calculation returns the error message and leaves every
    /// piece of session state, history included, untouched.
    pub fn execute(
        &mut self,
        command: &Command,
    ) -> String {
        let labels = self.labels();

        match command {
            Command::Calc { amount, rate } => self.run_calculation(amount, rate.as_deref()),
            Command::Rate(text) => match parse_rate(text) {
                Ok(rate) => {
                    debug!(%rate, "session rate changed");
                    self.rate = rate;
                    format!("{}: {}%", labels.vat_percentage, rate)
                }
                Err(e) => e.to_string(),
            },
            Command::Direction(direction) => {
                self.direction = *direction;
                match direction {
                    VatDirection::Included => labels.vat_included.to_string(),
                    VatDirection::Excluded => labels.vat_excluded.to_string(),
                }
            }
            Command::SetCurrency(code) => match Currency::parse(code) {
                Some(currency) => {
                    self.currency = currency;
                    format!("{} {}", currency.code(), currency.symbol())
                }
                None => format!("unknown currency '{code}' (expected AZN, USD, EUR, RUB)"),
            },
            Command::SetLanguage(tag) => match Language::parse(tag) {
                Some(language) => {
                    self.language = language;
                    Labels::for_language(language).title.to_string()
                }
                None => format!("unknown language '{tag}' (expected en, az, ru)"),
            },
            Command::Words(enabled) => {
                self.show_in_words = *enabled;
                format!(
                    "{}: {}",
                    labels.show_in_words,
                    if *enabled { "on" } else { "off" }
                )
            }
            Command::History => render::history_listing(&self.history, labels),
            Command::Export => self.history.export_text(),
            Command::Copy(id) => match self.history.list().iter().find(|r| r.id == *id) {
                Some(record) => record.summary_line(),
                None => format!("[{id}] not found"),
            },
            Command::Remove(id) => {
                if self.history.remove(*id) {
                    format!("removed [{id}]")
                } else {
                    format!("[{id}] not found")
                }
            }
            Command::Clear => {
                self.history.clear();
                format!("{}: —", labels.history)
            }
            Command::Reset => {
                self.rate = self.default_rate;
                self.last_result = None;
                format!("{}: {}%", labels.reset, self.rate)
            }
            Command::Rates => {
                let presets = self
                    .quick_rates
                    .iter()
                    .map(|r| format!("{r}%"))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "{}: {} ({}: rate <value>)",
                    labels.vat_percentage, presets, labels.custom
                )
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn run_calculation(
        &mut self,
        amount: &str,
        rate: Option<&str>,
    ) -> String {
        let parsed = parse_input("amount", amount).and_then(|amount| {
            let rate = match rate {
                Some(text) => parse_input("rate", text)?,
                None => self.rate,
            };
            Ok((amount, rate))
        });

        let (amount, rate) = match parsed {
            Ok(inputs) => inputs,
            Err(e) => return e.to_string(),
        };

        match calculate(amount, rate, self.direction) {
            Ok(breakdown) => {
                let record = self.history.add(NewCalculationRecord::from_breakdown(
                    amount,
                    rate,
                    self.direction,
                    self.currency,
                    breakdown,
                ));
                debug!(id = record.id, "calculation stored");
                let block = render::result_block(
                    &record,
                    self.labels(),
                    self.language,
                    self.show_in_words,
                );
                self.last_result = Some(record);
                block
            }
            Err(e) => e.to_string(),
        }
    }
}

/// Validates a session-rate change with the same rules as the engine.
fn parse_rate(text: &str) -> Result<Decimal, VatError> {
    let rate = parse_input("rate", text)?;
    if rate < Decimal::ZERO {
        return Err(VatError::NegativeRate(rate));
    }
    Ok(rate)
}

const HELP: &str = "\
commands:
  calc <amount> [rate]   calculate VAT for an amount
  rate <value>           set the session VAT percentage
  included | excluded    set whether amounts already contain VAT
  currency <code>        AZN, USD, EUR or RUB
  lang <tag>             en, az or ru
  words on|off           spell money figures out in words
  history                list calculations, newest first
  export                 print raw summary lines
  copy <id>              print one calculation's summary line
  remove <id>            delete one calculation
  clear                  delete all calculations
  reset                  restore the default rate
  rates                  show preset percentages
  quit                   leave";
