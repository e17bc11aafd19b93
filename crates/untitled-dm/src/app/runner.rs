//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main event loop.
//! Events are read from an mpsc channel and dispatched to handlers.

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::commands::Registry;
use crate::events::AppEvent;

use super::state::{App, LastRun};

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    /// A run failed with quit-on-error set.
    RunFailed(LastRun),
}

/// Entry point: set up terminal and run the event loop.
///
/// Once raw mode is on, the terminal is restored on every exit path.
pub fn run(
    registry: Registry,
    default_selected: Option<usize>,
    quit_on_error: bool,
) -> io::Result<SessionEnd> {
    enable_raw_mode()?;
    let mut terminal = match enter_screen() {
        Ok(terminal) => terminal,
        Err(err) => {
            if let Err(restore_err) = restore_terminal() {
                warn!(error = %restore_err, "terminal restore failed");
            }
            return Err(err);
        }
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx.clone());
    let mut app = App::new(registry, default_selected, quit_on_error, event_tx);

    let result = run_loop(&mut terminal, &mut app, &event_rx);
    let restored = restore_terminal();

    first_error([result, restored])?;
    Ok(match app.exit_error.take() {
        Some(last_run) => SessionEnd::RunFailed(last_run),
        None => SessionEnd::Quit,
    })
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo raw mode and the alternate screen. Every step runs even when an
/// earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        stdout.execute(LeaveAlternateScreen).map(|_| ()),
        stdout.execute(Show).map(|_| ()),
    ])
}

/// The first failure among results that have all been produced already.
pub(super) fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results
        .into_iter()
        .find(|result| result.is_err())
        .unwrap_or(Ok(()))
}

/// Main event loop: process events until quit.
pub(super) fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &Receiver<AppEvent>,
) -> io::Result<()> {
    terminal.clear()?;
    terminal.draw(|frame| super::render::render(app, frame))?;

    while !app.should_quit {
        let event = match event_rx.recv() {
            Ok(event) => event,
            Err(_) => break,
        };
        super::input::handle_event(app, event);
        // Drain any pending events before redraw
        while !app.should_quit {
            let Ok(event) = event_rx.try_recv() else {
                break;
            };
            super::input::handle_event(app, event);
        }

        terminal.draw(|frame| super::render::render(app, frame))?;
    }
    info!("event loop finished");
    Ok(())
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if sender.send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(cols, rows)) => {
                debug!(cols, rows, "terminal resized");
                if sender.send(AppEvent::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}
