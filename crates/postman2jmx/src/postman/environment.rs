//! Environment loading with graceful degradation.
//!
//! The environment file is optional input. A missing or unparseable file
//! must not fail the conversion: the caller warns and proceeds with no
//! environment variables. Only enabled entries are kept, in source order.

use std::io;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

use crate::postman::model::KeyValue;

/// A Postman environment document.
#[derive(Debug, Deserialize)]
pub struct Environment {
    /// The variable entries. A document without `values` is an empty
    /// environment, not an error.
    #[serde(default)]
    pub values: Vec<EnvironmentValue>,
}

/// One environment entry.
#[derive(Debug, Deserialize)]
pub struct EnvironmentValue {
    pub key: Option<String>,
    pub value: Option<Value>,

    /// Disabled entries are dropped; absent means enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Outcome of attempting to load an environment file.
#[derive(Debug)]
pub enum EnvironmentLoad {
    /// The file parsed; holds the enabled entries in source order.
    Loaded(Vec<KeyValue>),

    /// The file does not exist.
    NotFound,

    /// The file exists but is not valid JSON.
    Unparseable,
}

/// Load the environment file at `path`.
///
/// Absence and parse failures are reported through [`EnvironmentLoad`] so
/// the caller can warn and continue; other IO errors (e.g. permissions)
/// propagate as fatal.
pub fn load_environment(path: &Path) -> Result<EnvironmentLoad> {
    let content = match fs_err::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(EnvironmentLoad::NotFound);
        }
        Err(err) => return Err(err.into()),
    };

    let Ok(environment) = serde_json::from_str::<Environment>(&content) else {
        return Ok(EnvironmentLoad::Unparseable);
    };

    let values = environment
        .values
        .into_iter()
        .filter(|value| value.enabled)
        .map(|value| KeyValue {
            key: value.key,
            value: value.value,
        })
        .collect();

    Ok(EnvironmentLoad::Loaded(values))
}

/// Helper for serde default values.
fn default_true() -> bool {
    true
}
