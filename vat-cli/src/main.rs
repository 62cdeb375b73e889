use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vat_cli::config;
use vat_cli::i18n::Labels;
use vat_cli::session::{Command, CommandError, Session};
use vat_core::{Currency, Language, VatDirection};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// VAT calculator with history and amount-in-words rendering.
///
/// Pass `--amount` for a one-shot calculation, or no amount to start an
/// interactive session (type `help` there for the command list).
#[derive(Debug, Parser)]
#[command(name = "vat")]
struct Cli {
    /// Amount to calculate in one-shot mode.
    #[arg(long)]
    amount: Option<String>,

    /// VAT percentage; falls back to the configured default (18).
    #[arg(long)]
    rate: Option<String>,

    /// Treat the amount as already containing VAT.
    #[arg(long)]
    included: bool,

    /// Currency code: AZN, USD, EUR or RUB.
    #[arg(long)]
    currency: Option<String>,

    /// Interface language: en, az or ru.
    #[arg(long)]
    lang: Option<String>,

    /// Spell money figures out in words.
    #[arg(long)]
    words: bool,

    /// Path to the configuration file.
    #[arg(long, default_value = "vat.toml")]
    config: PathBuf,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = config::load(&cli.config)?;
    debug!(?config, "session defaults loaded");
    let mut session = Session::new(&config);

    if let Some(code) = &cli.currency {
        session.currency = match Currency::parse(code) {
            Some(currency) => currency,
            None => bail!("unknown currency '{code}' (expected AZN, USD, EUR, RUB)"),
        };
    }
    if let Some(tag) = &cli.lang {
        session.language = match Language::parse(tag) {
            Some(language) => language,
            None => bail!("unknown language '{tag}' (expected en, az, ru)"),
        };
    }
    if cli.included {
        session.direction = VatDirection::Included;
    }
    if cli.words {
        session.show_in_words = true;
    }

    match cli.amount {
        Some(amount) => {
            let output = session.execute(&Command::Calc {
                amount,
                rate: cli.rate,
            });
            // Nothing stored means the calculation was rejected.
            if session.history.is_empty() {
                bail!("{output}");
            }
            println!("{output}");
        }
        None => run_interactive(&mut session)?,
    }

    Ok(())
}

// ─── interactive loop ────────────────────────────────────────────────────────

fn run_interactive(session: &mut Session) -> Result<()> {
    println!(
        "{} (type 'help' for commands)",
        Labels::for_language(session.language).title
    );

    let mut input = io::stdin().lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let output = session.execute(&command);
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(CommandError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
