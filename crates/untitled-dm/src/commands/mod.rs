//! Command model for the launch menu.
//!
//! This module covers everything between raw inputs and a running process:
//! - Parsing: tokenizing `-e` values into records (parse.rs)
//! - Registry: ordering choices and binding commands to them (registry.rs)
//! - Execution: running a command and capturing its output (exec/)
//!
//! A record with an empty program is a label-only choice. It shows up in the
//! menu but has nothing to run.

mod exec;
mod parse;
mod registry;

use serde::Deserialize;

pub use exec::{run_command, RunOutcome};
pub use registry::Registry;

#[cfg(test)]
pub use exec::NO_COMMAND_MESSAGE;

/// One menu entry as declared in the config file or on the command line.
///
/// Every field is optional. Config keys are folded to lowercase before
/// decoding, so `Name`, `name` and `NAME` all land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommandRecord {
    #[serde(rename = "name", default)]
    pub name: String,
    #[serde(rename = "command", default)]
    pub program: String,
    #[serde(rename = "args", default)]
    pub args: Vec<String>,
}

/// An external program with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
}

impl Command {
    /// Program and arguments joined for display and logs.
    pub fn display_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
