//! Terminal launch menu.
//!
//! Shows a list of named commands from a config file and `-e` flags, lets
//! the operator arm one and confirm it, then runs it and shows its output.

mod app;
mod cli;
mod commands;
mod config;
mod events;
mod exit_codes;
mod keymap;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::app::SessionEnd;
use crate::cli::Cli;
use crate::commands::Registry;
use crate::config::load_config;

fn main() {
    match run(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FATAL);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    if cli.version {
        println!("untitled-dm v{}", env!("CARGO_PKG_VERSION"));
        return Ok(exit_codes::OK);
    }

    logging::init().context("initialize logging")?;

    let config = load_config(&cli.config)?;
    let registry = Registry::build(&cli.extra, &config.commands).context("build command menu")?;
    info!(
        choices = registry.len(),
        quit_on_error = cli.quit_on_error,
        "starting menu"
    );

    let end = app::run(registry, cli.default_selected(), cli.quit_on_error)
        .context("run terminal menu")?;
    if let SessionEnd::RunFailed(last_run) = end {
        let error = last_run.error.unwrap_or_default();
        eprint!("{}", app::failure_text(&error, &last_run.output));
    }
    Ok(exit_codes::OK)
}
