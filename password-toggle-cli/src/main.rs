//! password-toggle CLI
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use password_toggle_cli::commands;
use password_toggle_cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("password_toggle=debug,password_toggle_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match dispatch(cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout();
            match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run the selected command and return what it prints.
fn dispatch(cli: Cli) -> anyhow::Result<String> {
    let format = cli.format;
    match cli.command {
        Commands::Schema => commands::run_schema(format),
        Commands::Defaults { source } => commands::run_defaults(&source, format),
        Commands::Resolve {
            source,
            set,
            overrides,
            name,
        } => commands::run_resolve(&source, overrides.as_deref(), &set, &name, format),
        Commands::Check { source } => commands::run_check(&source),
    }
}
