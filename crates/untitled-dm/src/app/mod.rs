//! Application orchestration and main event loop.
//!
//! The app is structured around a single `App` struct that holds the menu
//! state. Events are processed sequentially in the main loop.
//!
//! Submodules:
//! - state: App and Selection types, transition rules
//! - runner: main loop and terminal setup
//! - input: key and run-outcome event handling
//! - render: UI rendering

mod input;
mod render;
mod runner;
mod state;


pub use render::failure_text;
pub use runner::{run, SessionEnd};
