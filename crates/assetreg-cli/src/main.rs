//! # assetreg CLI entry point
//!
//! Parses command-line arguments, sets up tracing on stderr and dispatches
//! to the ledger handlers. Exit codes: `0` success, `1` registry domain
//! failure, `2` any other failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetreg_cli::config::CliConfig;
use assetreg_cli::ledger::LedgerCommand;
use assetreg_cli::run_on_state_file;

/// Asset registry over a file-backed key-value ledger.
#[derive(Parser, Debug)]
#[command(name = "assetreg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file holding the ledger state.
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: LedgerCommand,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let state_file = config.state_file(cli.state_file.as_deref());
    tracing::debug!(state_file = %state_file.display(), "resolved state file");

    let mut stdout = std::io::stdout().lock();
    match run_on_state_file(&cli.command, &state_file, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
