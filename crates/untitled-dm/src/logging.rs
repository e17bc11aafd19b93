//! Development-time tracing.
//!
//! The terminal belongs to the menu, so diagnostics never go to stdout or
//! stderr. Tracing is only installed when `RUST_LOG` is set, and then
//! writes to `$UNTITLED_DM_LOG` or `~/.local/state/untitled-dm/debug.log`.
//!
//! ```bash
//! RUST_LOG=untitled_dm=debug untitled-dm -c config.toml
//! ```

use std::env;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_PATH_VAR: &str = "UNTITLED_DM_LOG";

/// Initialize file logging if `RUST_LOG` is set.
pub fn init() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .init();
    Ok(())
}

fn log_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(LOG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("untitled-dm")
            .join("debug.log"),
    )
}
