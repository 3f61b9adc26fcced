use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use common::{InputEvent, InputSource, Key};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Reads crossterm events without blocking.
///
/// Terminals only report key releases when keyboard enhancement is active.
/// Without it a key counts as held for the frame its press (or repeat) arrives in.
pub struct CrosstermInput {
    held: HashSet<Key>,
    reports_release: bool,
}

impl CrosstermInput {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: HashSet::new(),
            reports_release,
        }
    }

    /// Update held state from one key event and return the discrete event, if any.
    pub fn translate(&mut self, key: KeyEvent) -> Option<InputEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let mapped = map_key_code(key.code);
        match key.kind {
            KeyEventKind::Press => {
                self.held.insert(mapped);
                Some(InputEvent::KeyDown(mapped))
            }
            KeyEventKind::Repeat => {
                self.held.insert(mapped);
                None
            }
            KeyEventKind::Release => {
                self.held.remove(&mapped);
                None
            }
        }
    }
}

pub fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

impl InputSource for CrosstermInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        if !self.reports_release {
            self.held.clear();
        }

        let mut out = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input_event) = self.translate(key) {
                    out.push(input_event);
                }
            }
        }
        Ok(out)
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_game_keys() {
        assert_eq!(map_key_code(KeyCode::Char(' ')), Key::Space);
        assert_eq!(map_key_code(KeyCode::Esc), Key::Escape);
        assert_eq!(map_key_code(KeyCode::Char('r')), Key::Char('r'));
        assert_eq!(map_key_code(KeyCode::Left), Key::Left);
        assert_eq!(map_key_code(KeyCode::F(5)), Key::Other);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut input = CrosstermInput::new(false);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.translate(event), Some(InputEvent::Quit));
    }

    #[test]
    fn press_and_release_track_held_keys() {
        let mut input = CrosstermInput::new(true);
        assert_eq!(input.translate(press(KeyCode::Up)), Some(InputEvent::KeyDown(Key::Up)));
        assert!(input.is_held(Key::Up));

        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(input.translate(release), None);
        assert!(!input.is_held(Key::Up));
    }

    #[test]
    fn repeats_keep_the_key_held_without_new_presses() {
        let mut input = CrosstermInput::new(false);
        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(input.translate(repeat), None);
        assert!(input.is_held(Key::Left));
    }
}
