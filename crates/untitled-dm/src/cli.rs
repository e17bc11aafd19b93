//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "untitled-dm",
    about = "Pick a session command from a menu and launch it",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print program version and exit.
    #[arg(short = 'V')]
    pub version: bool,

    /// Quit on command error.
    #[arg(short = 'q')]
    pub quit_on_error: bool,

    /// Path to configuration file.
    #[arg(short = 'c', value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Index to default selection. No selection if negative.
    #[arg(
        short = 'd',
        value_name = "INDEX",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub default_selection: i64,

    /// Extra command as "NAME=PROGRAM ARG...". Quote arguments containing spaces.
    #[arg(short = 'e', value_name = "COMMAND")]
    pub extra: Vec<String>,
}

impl Cli {
    /// Default selection as an index, `None` when negative.
    pub fn default_selected(&self) -> Option<usize> {
        usize::try_from(self.default_selection).ok()
    }
}
