//! Application state types.
//!
//! `Selection` is the menu state machine: cursor, armed selection and the
//! result of the last run. `App` wraps it with the registry and the event
//! sender used to dispatch command runs.

use std::sync::mpsc::Sender;

use tracing::warn;

use crate::commands::Registry;
use crate::events::AppEvent;
use crate::keymap::Keymap;

/// Output of the most recent run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastRun {
    pub output: String,
    pub error: Option<String>,
}

/// Whether the loop keeps going after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Selection {
    choices: Vec<String>,
    cursor: usize,
    selected: Option<usize>,
    quit_on_error: bool,
    last_run: LastRun,
}

impl Selection {
    /// A default outside the choice range is dropped.
    pub fn new(
        choices: Vec<String>,
        default_selected: Option<usize>,
        quit_on_error: bool,
    ) -> Self {
        let selected = match default_selected {
            Some(index) if index >= choices.len() => {
                warn!(
                    index,
                    choices = choices.len(),
                    "default selection out of range, ignoring"
                );
                None
            }
            other => other,
        };
        Self {
            choices,
            cursor: 0,
            selected,
            quit_on_error,
            last_run: LastRun::default(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn last_run(&self) -> &LastRun {
        &self.last_run
    }

    pub fn move_up(&mut self) {
        let len = self.choices.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        let len = self.choices.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Arm the choice under the cursor, or disarm it if already armed.
    pub fn toggle_select(&mut self) {
        if self.choices.is_empty() {
            return;
        }
        if self.selected == Some(self.cursor) {
            self.selected = None;
        } else {
            self.selected = Some(self.cursor);
        }
    }

    pub fn record_success(&mut self, output: String) {
        self.last_run = LastRun {
            output,
            error: None,
        };
    }

    /// Store a failed run. Ends the session when quit-on-error is set.
    pub fn record_failure(&mut self, output: String, error: String) -> Flow {
        self.last_run = LastRun {
            output,
            error: Some(error),
        };
        if self.quit_on_error {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }
}

/// Main application state container.
///
/// Holds the menu state and everything needed to act on it. Event handling
/// lives in input.rs and drawing in render.rs.
pub struct App {
    pub selection: Selection,
    pub registry: Registry,
    pub keymap: Keymap,
    pub event_tx: Sender<AppEvent>,
    pub should_quit: bool,
    /// Set when the session ended because a run failed under quit-on-error.
    pub exit_error: Option<LastRun>,
}

impl App {
    pub fn new(
        registry: Registry,
        default_selected: Option<usize>,
        quit_on_error: bool,
        event_tx: Sender<AppEvent>,
    ) -> Self {
        let selection = Selection::new(
            registry.choices().to_vec(),
            default_selected,
            quit_on_error,
        );
        Self {
            selection,
            registry,
            keymap: Keymap::default(),
            event_tx,
            should_quit: false,
            exit_error: None,
        }
    }
}
