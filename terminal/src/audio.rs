use std::io::Write;

use common::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Eat,
    GameOver,
}

impl AudioCue {
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FoodEaten { .. } => Some(AudioCue::Eat),
            GameEvent::SnakeDied => Some(AudioCue::GameOver),
            _ => None,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Uses the terminal bell as the only sound the terminal has.
/// Write failures silence the sink instead of interrupting the game.
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) {
        if !self.enabled {
            return;
        }

        // Game over gets a double ring
        let rings: &[u8] = match cue {
            AudioCue::Eat => b"\x07",
            AudioCue::GameOver => b"\x07\x07",
        };

        if let Err(err) = self.out.write_all(rings).and_then(|_| self.out.flush()) {
            tracing::warn!("Disabling audio after write failure: {}", err);
            self.enabled = false;
        }
    }
}
