use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use convertmoney::core::CurrencyCode;
use convertmoney::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for convertmoney::AppCommand {
    fn from(cmd: Commands) -> convertmoney::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => convertmoney::AppCommand::Convert {
                amount,
                from,
                to,
                json,
            },
            Commands::Rate { from, to } => convertmoney::AppCommand::Rate { from, to },
            Commands::List { quote } => convertmoney::AppCommand::List { quote },
            Commands::Interactive => convertmoney::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency (defaults to the configured one)
        from: Option<CurrencyCode>,
        /// Target currency (defaults to the configured one)
        to: Option<CurrencyCode>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display the exchange rate between two currencies
    Rate {
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
    },
    /// List supported currencies and their rates
    List {
        /// Currency to quote the other rates in
        quote: Option<CurrencyCode>,
    },
    /// Start an interactive converter session
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => convertmoney::cli::setup::setup(),
        Some(cmd) => convertmoney::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
