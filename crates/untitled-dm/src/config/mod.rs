//! Config file loading.
//!
//! The config file is a TOML document with a `[[Commands]]` array. A missing
//! file is not an error and yields no commands; anything that exists but
//! cannot be read or decoded is.
//!
//! Keys are matched without regard to case: the document is folded to
//! lowercase keys before it is decoded.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::{Table, Value};
use tracing::{debug, info};

use crate::commands::CommandRecord;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub commands: Vec<CommandRecord>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode config file {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    commands: Vec<CommandRecord>,
}

/// Lowercase every key, recursing into tables and arrays.
///
/// When two spellings of a key collide, the all-lowercase one wins.
fn fold_keys(table: Table) -> Table {
    let mut folded = Table::new();
    for (key, value) in table {
        let value = fold_value(value);
        let lower = key.to_lowercase();
        if key == lower {
            folded.insert(lower, value);
        } else {
            folded.entry(lower).or_insert(value);
        }
    }
    folded
}

fn fold_value(value: Value) -> Value {
    match value {
        Value::Table(table) => Value::Table(fold_keys(table)),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_value).collect()),
        other => other,
    }
}

fn parse_config(path: &Path, contents: &str) -> Result<Config, ConfigError> {
    let decode = |source: toml::de::Error| ConfigError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let table = toml::from_str::<Table>(contents).map_err(decode)?;
    let raw = RawConfig::deserialize(Value::Table(fold_keys(table))).map_err(decode)?;
    Ok(Config {
        commands: raw.commands,
    })
}

/// Load the command list from `path`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using no commands");
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(path, &contents)?;
    info!(
        path = %path.display(),
        commands = config.commands.len(),
        "loaded config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests;
