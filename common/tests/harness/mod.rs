#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use common::{Clock, GameEvent, GameStatus, GameView, InputEvent, InputSource, Key, Position, Presenter};

/// Clock that only moves when slept on or advanced by hand.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
    pub slept: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn handle(&self) -> Rc<Cell<Duration>> {
        self.now.clone()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.now.set(self.now.get() + duration);
        self.slept.set(self.slept.get() + duration);
    }
}

/// Input played back frame by frame
#[derive(Default)]
pub struct ScriptedInput {
    frames: VecDeque<(Vec<InputEvent>, HashSet<Key>)>,
    held: HashSet<Key>,
}

impl ScriptedInput {
    pub fn push_frame(&mut self, events: Vec<InputEvent>, held: &[Key]) -> &mut Self {
        self.frames.push_back((events, held.iter().copied().collect()));
        self
    }

    pub fn push_idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.push_frame(Vec::new(), &[]);
        }
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        match self.frames.pop_front() {
            Some((events, held)) => {
                self.held = held;
                Ok(events)
            }
            // Script exhausted: ask the loop to stop
            None => {
                self.held.clear();
                Ok(vec![InputEvent::Quit])
            }
        }
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Event(GameEvent),
    Render { status: GameStatus, score: u32, head: Position },
    Stats { score: u32, frames: u32 },
}

/// Presenter that records every call, optionally burning clock time per render.
#[derive(Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
    pub render_cost: Duration,
    pub clock: Option<Rc<Cell<Duration>>>,
}

impl RecordingPresenter {
    pub fn renders(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Render { .. })).count()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Event(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn stats(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stats { score, frames } => Some((*score, *frames)),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn handle_event(&mut self, event: &GameEvent) {
        self.calls.push(Call::Event(event.clone()));
    }

    fn render(&mut self, view: &GameView<'_>) -> Result<()> {
        if let Some(clock) = &self.clock {
            clock.set(clock.get() + self.render_cost);
        }
        self.calls.push(Call::Render {
            status: view.status,
            score: view.score,
            head: view.snake.head(),
        });
        Ok(())
    }

    fn report_stats(&mut self, score: u32, frames: u32) {
        self.calls.push(Call::Stats { score, frames });
    }
}
