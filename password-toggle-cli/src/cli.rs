//! CLI definition for the password toggle command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for printed option sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Password toggle - option inspection and resolution
///
/// Loads the application-wide password toggle configuration and resolves
/// per-field overrides into the variables handed to templates.
#[derive(Parser, Debug)]
#[command(name = "password-toggle")]
#[command(version)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where application configuration is read from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read this configuration file instead of discovering one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Application root searched for config/packages/password_toggle.*
    #[arg(long, value_name = "DIR", conflicts_with = "config")]
    pub root: Option<PathBuf>,

    /// Ignore PASSWORD_TOGGLE_* environment variables
    #[arg(long)]
    pub no_env: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every recognized option with its type and built-in default
    Schema,
    /// Print the processed application-wide defaults
    Defaults {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Resolve per-field overrides and print the view variables
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Override an option, value parsed as YAML (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Read overrides from a YAML or JSON mapping
        #[arg(long, value_name = "FILE")]
        overrides: Option<PathBuf>,

        /// Field name used in messages
        #[arg(long, default_value = "password")]
        name: String,
    },
    /// Validate the application configuration
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}
