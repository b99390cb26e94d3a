//! postman2jmx: convert Postman collections to JMeter test plans.
//!
//! This crate provides the main entry point for the postman2jmx binary. It
//! parses CLI arguments and runs one synchronous conversion: load the
//! collection (and optional environment), build the JMX element tree, and
//! write the serialized plan to the output path.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod jmx;
pub mod postman;
pub mod printer;

/// Entry point for the postman2jmx CLI.
///
/// Parses CLI arguments and runs the conversion. On failure, the anyhow
/// error chain is rendered as an `error:` line followed by its `Caused by`
/// causes.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let printer = Printer::new(cli.verbose, cli.quiet);

    match commands::convert::execute(&cli, printer) {
        Ok(code) => code.into(),
        Err(err) => {
            let mut causes = err.chain();
            // An anyhow::Error always has at least one cause (itself).
            printer.error(
                &causes
                    .next()
                    .expect("error chain is never empty")
                    .to_string(),
            );
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}
