//! Event handling.
//!
//! Every event goes through `handle_event`, which applies the matching
//! state transition. Command runs are handed to a worker thread that
//! reports back through the event channel.

use std::sync::mpsc::Sender;

use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

use crate::commands::{run_command, Command, RunOutcome};
use crate::events::AppEvent;
use crate::keymap::Action;

use super::state::{App, Flow};

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize => {}
        AppEvent::CommandDone { label, outcome } => match outcome {
            RunOutcome::Completed { output } => {
                info!(command = %label, "run completed");
                app.selection.record_success(output);
            }
            RunOutcome::Failed { output, error } => {
                warn!(command = %label, error = %error, "run failed");
                if app.selection.record_failure(output, error) == Flow::Quit {
                    app.exit_error = Some(app.selection.last_run().clone());
                    app.should_quit = true;
                }
            }
        },
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(action) = app.keymap.action_for(key) else {
        return;
    };
    debug!(?action, "key action");
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.selection.move_up(),
        Action::MoveDown => app.selection.move_down(),
        Action::ToggleSelect => app.selection.toggle_select(),
        Action::Confirm => confirm(app),
    }
}

/// Run the command bound to the armed choice.
///
/// A second confirm while a run is in flight starts another process; the
/// outcome that arrives last is the one shown.
fn confirm(app: &App) {
    let command = app
        .selection
        .selected()
        .and_then(|index| app.registry.command(index))
        .cloned();
    start_command(&app.event_tx, command);
}

fn start_command(tx: &Sender<AppEvent>, command: Option<Command>) {
    let Some(command) = command else {
        debug!("confirm without a bound command");
        let _ = tx.send(AppEvent::CommandDone {
            label: String::new(),
            outcome: run_command(None),
        });
        return;
    };

    let label = command.display_line();
    info!(command = %label, "starting run");
    let tx = tx.clone();
    std::thread::spawn(move || {
        let outcome = run_command(Some(&command));
        let _ = tx.send(AppEvent::CommandDone { label, outcome });
    });
}
