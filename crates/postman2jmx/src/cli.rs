//! CLI argument definitions for postman2jmx.
//!
//! The converter is a single one-shot command, so [`Cli`] carries the two
//! positional paths and the optional environment flag directly rather than
//! a subcommand tree.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Convert a Postman collection to a JMeter test plan.
#[derive(Parser, Debug)]
#[command(
    name = "postman2jmx",
    author,
    version,
    about = "Convert a Postman collection to a JMeter test plan.",
    styles = STYLES
)]
pub struct Cli {
    /// Postman collection JSON file.
    pub input: PathBuf,

    /// Output JMX file.
    pub output: PathBuf,

    /// Postman environment JSON file (optional).
    #[arg(short, long)]
    pub environment: Option<PathBuf>,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,
}
