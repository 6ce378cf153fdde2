//! Command-line front end for the password toggle options.
//!
//! Commands:
//! - `password-toggle schema`: list recognized options and built-in defaults
//! - `password-toggle defaults`: print the processed application defaults
//! - `password-toggle resolve`: resolve per-field overrides into view variables
//! - `password-toggle check`: validate the application configuration

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat, SourceArgs};
