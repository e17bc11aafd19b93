//! Command execution.
//!
//! Runs the confirmed command to completion and reports exactly one
//! outcome. Standard output and standard error share a single pipe so the
//! captured text keeps the order the program wrote it in.


use std::io::{self, Read};
use std::process::{Command as ProcessCommand, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

use super::Command;

/// Message reported when the selected choice has no command bound.
pub const NO_COMMAND_MESSAGE: &str = "No command to run\n";

#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not create output pipe: {source}")]
    Pipe {
        #[source]
        source: io::Error,
    },
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("could not read output of {program}: {source}")]
    Capture {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("could not wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} failed with {status}")]
    ExitStatus { program: String, status: ExitStatus },
}

/// Terminal result of running (or not running) a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { output: String },
    Failed { output: String, error: String },
}

/// Run a command, or report that there is nothing to run.
///
/// Blocks until the process exits. No timeout is applied.
pub fn run_command(command: Option<&Command>) -> RunOutcome {
    let Some(command) = command else {
        return RunOutcome::Completed {
            output: NO_COMMAND_MESSAGE.to_string(),
        };
    };

    debug!(command = %command.display_line(), "starting command");
    let (output, result) = capture_combined(command);
    match result {
        Ok(()) => {
            debug!(command = %command.display_line(), "command finished");
            RunOutcome::Completed { output }
        }
        Err(err) => {
            warn!(command = %command.display_line(), error = %err, "command failed");
            RunOutcome::Failed {
                output,
                error: err.to_string(),
            }
        }
    }
}

/// Spawn the program and collect interleaved stdout/stderr.
///
/// Output read before a failure is still returned alongside the error.
fn capture_combined(command: &Command) -> (String, Result<(), RunError>) {
    let program = command.program.clone();
    let (mut reader, writer) = match io::pipe() {
        Ok(pair) => pair,
        Err(source) => return (String::new(), Err(RunError::Pipe { source })),
    };
    let stderr_writer = match writer.try_clone() {
        Ok(clone) => clone,
        Err(source) => return (String::new(), Err(RunError::Pipe { source })),
    };

    let mut process = ProcessCommand::new(&command.program);
    process
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(stderr_writer);

    let mut child = match process.spawn() {
        Ok(child) => child,
        Err(source) => return (String::new(), Err(RunError::Spawn { program, source })),
    };
    // The builder holds the write ends; the read below only sees EOF once
    // they are closed.
    drop(process);

    let mut bytes = Vec::new();
    let read_result = reader.read_to_end(&mut bytes);
    let output = String::from_utf8_lossy(&bytes).into_owned();

    let status = match child.wait() {
        Ok(status) => status,
        Err(source) => return (output, Err(RunError::Wait { program, source })),
    };
    if let Err(source) = read_result {
        return (output, Err(RunError::Capture { program, source }));
    }
    if !status.success() {
        return (output, Err(RunError::ExitStatus { program, status }));
    }
    (output, Ok(()))
}
