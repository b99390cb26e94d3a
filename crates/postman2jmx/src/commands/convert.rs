//! The conversion command: load, transform, serialize, write.
//!
//! A missing or malformed collection is fatal and aborts before any output
//! is written. A missing or malformed environment file only degrades the
//! run: the exact warning line goes to stdout and the conversion proceeds
//! with no environment variables.

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::jmx;
use crate::postman::{Collection, EnvironmentLoad, load_environment};
use crate::printer::Printer;

/// Execute the conversion described by the parsed CLI arguments.
pub fn execute(cli: &Cli, printer: Printer) -> Result<ExitStatus> {
    let collection = Collection::from_path(&cli.input)?;

    let environment = match &cli.environment {
        Some(path) => match load_environment(path)? {
            EnvironmentLoad::Loaded(values) => values,
            EnvironmentLoad::NotFound => {
                printer.info(&format!(
                    "Warning: Environment file '{}' not found. Skipping environment variables.",
                    path.display()
                ));
                Vec::new()
            }
            EnvironmentLoad::Unparseable => {
                printer.info(&format!(
                    "Warning: Could not parse environment file '{}'. Skipping environment variables.",
                    path.display()
                ));
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    printer.debug(&format!(
        "loaded {} top-level items and {} environment variables",
        collection.item.len(),
        environment.len()
    ));

    let plan = jmx::build_plan(&collection, &environment);
    let text = jmx::serialize(&plan)?;
    fs_err::write(&cli.output, text)
        .with_context(|| format!("failed to write `{}`", cli.output.display()))?;

    printer.info(&format!(
        "Successfully converted {} to {}",
        cli.input.display(),
        cli.output.display()
    ));

    Ok(ExitStatus::Success)
}
