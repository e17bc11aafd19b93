//! Key chord parsing and matching.
//!
//! Parses key chord strings like "ctrl+c" or "space" and matches them
//! against crossterm KeyEvents at runtime. The menu bindings are declared
//! as chord strings in `BINDINGS`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// Menu actions a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleSelect,
    Confirm,
}

pub const BINDINGS: &[(&str, Action)] = &[
    ("ctrl+c", Action::Quit),
    ("q", Action::Quit),
    ("up", Action::MoveUp),
    ("k", Action::MoveUp),
    ("down", Action::MoveDown),
    ("j", Action::MoveDown),
    ("space", Action::ToggleSelect),
    ("enter", Action::Confirm),
];

/// Parsed form of `BINDINGS`.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyChord, Action)>,
}

impl Keymap {
    pub fn from_bindings(bindings: &[(&str, Action)]) -> Self {
        let bindings = bindings
            .iter()
            .filter_map(|(chord, action)| parse_key_chord(chord).map(|chord| (chord, *action)))
            .collect();
        Self { bindings }
    }

    /// Action bound to a key press. Releases and repeats map to nothing.
    pub fn action_for(&self, event: KeyEvent) -> Option<Action> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings
            .iter()
            .find(|(chord, _)| matches_chord(event, chord))
            .map(|(_, action)| *action)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_bindings(BINDINGS)
    }
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    for part in parts {
        match part {
            "ctrl" => chord.ctrl = true,
            "alt" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" => chord.meta = true,
            key => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(key)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }

    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "enter" => Some(KeyCode::Enter),
        "space" => Some(KeyCode::Char(' ')),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(first))
            } else {
                None
            }
        }
    }
}

pub fn matches_chord(event: KeyEvent, chord: &KeyChord) -> bool {
    if event.code != chord.key {
        return false;
    }

    let modifiers = event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let meta = modifiers.contains(KeyModifiers::SUPER) || modifiers.contains(KeyModifiers::META);

    ctrl == chord.ctrl && alt == chord.alt && shift == chord.shift && meta == chord.meta
}
