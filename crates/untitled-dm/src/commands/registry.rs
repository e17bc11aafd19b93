//! Menu registry: ordered choice labels plus the commands bound to them.
//!
//! Extra commands from the command line come first, followed by the
//! commands from the config file, each group in its given order.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::parse::{parse_extra_command, ParseError};
use super::{Command, CommandRecord};

#[derive(Debug, Error)]
#[error("invalid extra command #{position}")]
pub struct RegistryError {
    /// Zero-based position of the offending `-e` value.
    pub position: usize,
    #[source]
    pub source: ParseError,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    choices: Vec<String>,
    commands: HashMap<usize, Command>,
}

impl Registry {
    /// Build the registry from raw `-e` values and decoded config records.
    ///
    /// Fails on the first malformed extra command.
    pub fn build(extra: &[String], configured: &[CommandRecord]) -> Result<Self, RegistryError> {
        let mut records = Vec::with_capacity(extra.len() + configured.len());
        for (position, raw) in extra.iter().enumerate() {
            let record =
                parse_extra_command(raw).map_err(|source| RegistryError { position, source })?;
            records.push(record);
        }
        records.extend(configured.iter().cloned());
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = CommandRecord>) -> Self {
        let mut registry = Self::default();
        for record in records {
            let index = registry.choices.len();
            registry.choices.push(record.name);
            if record.program.is_empty() {
                debug!(index, "label-only choice");
                continue;
            }
            registry.commands.insert(
                index,
                Command {
                    program: record.program,
                    args: record.args,
                },
            );
        }
        registry
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Command bound to a choice index, if any.
    pub fn command(&self, index: usize) -> Option<&Command> {
        self.commands.get(&index)
    }
}
