pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::currency::CurrencyCode;
use crate::core::engine::ConversionEngine;
use crate::core::screen::ConverterScreen;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
        json: bool,
    },
    Rate {
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
    },
    List {
        quote: Option<CurrencyCode>,
    },
    Interactive,
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Runs a command against the process stdin and stdout.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_command_with_io(command, config_path, stdin.lock(), &mut stdout)
}

pub fn run_command_with_io<R: BufRead, W: Write>(
    command: AppCommand,
    config_path: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = load_config(config_path)?;
    let engine = ConversionEngine::new(config.rate_table()?);
    let from = |code: Option<CurrencyCode>| code.unwrap_or(config.default_from);
    let to = |code: Option<CurrencyCode>| code.unwrap_or(config.default_to);

    match command {
        AppCommand::Convert {
            amount,
            from: from_code,
            to: to_code,
            json,
        } => cli::convert::run(&engine, &amount, from(from_code), to(to_code), json, out),
        AppCommand::Rate {
            from: from_code,
            to: to_code,
        } => cli::convert::run_rate(&engine, from(from_code), to(to_code), out),
        AppCommand::List { quote } => cli::list::run(&engine, from(quote), out),
        AppCommand::Interactive => {
            let mut screen =
                ConverterScreen::with_selection(engine, config.default_from, config.default_to)?;
            cli::interactive::run(&mut screen, input, out)
        }
    }
}
