//! UI rendering.
//!
//! The menu is a single text view: header, one line per choice with cursor
//! and selection markers, a footer hint, then the last run's output or
//! failure diagnostic.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;

use super::state::{App, Selection};

const TITLE: &str = "untitled-dm";
const PROMPT: &str = "What should we do?";
const HINT: &str = "Press space to select. Press enter to confirm selection.";
const FOOTER: &str = "Press q to quit.";

/// Main render entry point. Called each frame by the event loop.
pub fn render(app: &App, frame: &mut Frame) {
    let block = Block::default().padding(Padding::horizontal(1));
    let paragraph = Paragraph::new(view_lines(&app.selection))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}

/// Lines making up the menu view.
pub fn view_lines(selection: &Selection) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(format!("{TITLE} v{}", env!("CARGO_PKG_VERSION"))),
        Line::raw(""),
        Line::raw(PROMPT),
        Line::raw(HINT),
        Line::raw(""),
    ];

    for (idx, choice) in selection.choices().iter().enumerate() {
        let is_cursor = idx == selection.cursor();
        let cursor = if is_cursor { ">" } else { " " };
        let checked = if selection.selected() == Some(idx) {
            "x"
        } else {
            " "
        };
        let line = Line::raw(format!("{cursor} [{checked}] {choice}"));
        if is_cursor {
            lines.push(line.style(Style::default().add_modifier(Modifier::BOLD)));
        } else {
            lines.push(line);
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(FOOTER));
    lines.push(Line::raw(""));
    lines.extend(
        tail_text(selection)
            .lines()
            .map(|line| Line::raw(line.to_string())),
    );
    lines
}

/// Output block shown below the footer.
pub fn tail_text(selection: &Selection) -> String {
    let last_run = selection.last_run();
    match &last_run.error {
        Some(error) => failure_text(error, &last_run.output),
        None => last_run.output.clone(),
    }
}

pub fn failure_text(error: &str, output: &str) -> String {
    format!("\nCould not start selected option: {error}\n\n{output}")
}

#[cfg(test)]
mod tests {
    use super::{tail_text, view_lines};
    use crate::app::state::Selection;

    fn view(selection: &Selection) -> String {
        view_lines(selection)
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn selection(names: &[&str], selected: Option<usize>) -> Selection {
        Selection::new(
            names.iter().map(|name| name.to_string()).collect(),
            selected,
            false,
        )
    }

    #[test]
    fn view_shows_header_choices_and_footer() {
        let selection = selection(&["Desktop", "Shell"], None);
        let text = view(&selection);
        assert!(text.starts_with(&format!("untitled-dm v{}", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("What should we do?"));
        assert!(text.contains("> [ ] Desktop\n  [ ] Shell"));
        assert!(text.contains("Press q to quit."));
    }

    #[test]
    fn view_marks_selection_separately_from_cursor() {
        let mut selection = selection(&["Desktop", "Shell"], Some(1));
        let text = view(&selection);
        assert!(text.contains("> [ ] Desktop\n  [x] Shell"));

        selection.move_down();
        let text = view(&selection);
        assert!(text.contains("  [ ] Desktop\n> [x] Shell"));
    }

    #[test]
    fn view_shows_last_output() {
        let mut selection = selection(&["Shell"], None);
        selection.record_success("hello\nworld\n".to_string());
        let text = view(&selection);
        assert!(text.ends_with("Press q to quit.\n\nhello\nworld"));
    }

    #[test]
    fn view_shows_failure_instead_of_output() {
        let mut selection = selection(&["Shell"], None);
        selection.record_failure("partial\n".to_string(), "bash failed".to_string());
        assert_eq!(
            tail_text(&selection),
            "\nCould not start selected option: bash failed\n\npartial\n"
        );
        let text = view(&selection);
        assert!(text.contains("Could not start selected option: bash failed"));
        assert!(text.contains("partial"));
    }

    #[test]
    fn view_without_choices_still_renders() {
        let selection = selection(&[], None);
        let text = view(&selection);
        assert!(text.contains("Press space to select."));
        assert!(!text.contains("[ ]"));
    }
}
