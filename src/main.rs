use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use indexed_collections::postfix;
use tracing_subscriber::EnvFilter;

/// Log verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=debug` prints each step).
#[derive(Parser)]
#[command(name = "postfix", version)]
#[command(about = "Evaluate a postfix integer expression, e.g. \"-1 8 2 / +\"")]
struct Cli {
    /// Whitespace-separated integers and operators (+ - * / %)
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing()?;

    match postfix::evaluate(&cli.expression) {
        Ok(result) => {
            println!("Expression evaluates to {result}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(?err, "evaluation failed");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
