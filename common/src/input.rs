use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{DIRECTION_DEBOUNCE, Direction};

/// Keys the game reacts to. Anything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Movement keys in the order they are polled
    pub const MOVEMENT: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Discrete input captured since the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed or the process was asked to stop
    Quit,
    KeyDown(Key),
}

/// Where the frame loop reads input from. Both methods must not block.
pub trait InputSource {
    /// Drain everything captured since the previous call.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;

    /// Whether `key` is currently held down.
    fn is_held(&self, key: Key) -> bool;
}

/// Decide whether a turn request goes through.
///
/// Rejected when the previous accepted change was at most `DIRECTION_DEBOUNCE`
/// ago, or when it reverses `current` on a snake longer than one segment.
pub fn request_direction_change(
    current: Direction,
    requested: Direction,
    body_length: usize,
    last_change: Option<Duration>,
    now: Duration,
) -> Option<Direction> {
    if let Some(last) = last_change {
        if now.saturating_sub(last) <= DIRECTION_DEBOUNCE {
            return None;
        }
    }

    if current.is_opposite(&requested) && body_length > 1 {
        return None;
    }

    Some(requested)
}

/// Remembers when the last turn was accepted and applies the debounce.
#[derive(Debug, Default, Clone)]
pub struct InputRouter {
    last_change: Option<Duration>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_change(&self) -> Option<Duration> {
        self.last_change
    }

    pub fn route(
        &mut self,
        current: Direction,
        requested: Direction,
        body_length: usize,
        now: Duration,
    ) -> Option<Direction> {
        let accepted = request_direction_change(current, requested, body_length, self.last_change, now);
        if accepted.is_some() {
            self.last_change = Some(now);
        }
        accepted
    }

    /// Route the first held movement key (up, down, left, right priority).
    pub fn route_held<I: InputSource + ?Sized>(
        &mut self,
        input: &I,
        current: Direction,
        body_length: usize,
        now: Duration,
    ) -> Option<Direction> {
        let requested = Key::MOVEMENT
            .iter()
            .find(|key| input.is_held(**key))
            .and_then(|key| key.direction())?;
        self.route(current, requested, body_length, now)
    }

    pub fn reset(&mut self) {
        self.last_change = None;
    }
}
