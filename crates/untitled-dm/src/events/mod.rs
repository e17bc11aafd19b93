//! Application event types.
//!
//! Events come from the input thread (key presses, resizes) and from
//! command worker threads (run outcomes). They are sent via one mpsc
//! channel and processed sequentially in the main loop.

use crossterm::event::KeyEvent;

use crate::commands::RunOutcome;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
    CommandDone {
        /// Program and arguments, for logging.
        label: String,
        outcome: RunOutcome,
    },
}
