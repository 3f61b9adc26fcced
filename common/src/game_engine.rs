use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use crate::{
    GameCommand, GameEvent, GameState, GameStatus, GameView, InputEvent, InputRouter, InputSource,
    STATS_INTERVAL,
};

/// Receives everything the simulation produces. Has no write access back.
pub trait Presenter {
    /// Called for every event of a frame, before that frame's `render`.
    fn handle_event(&mut self, event: &GameEvent);

    fn render(&mut self, view: &GameView<'_>) -> Result<()>;

    /// Called once per `STATS_INTERVAL` with the frames drawn in that window.
    fn report_stats(&mut self, score: u32, frames: u32);
}

/// Monotonic time source for the frame loop
pub trait Clock {
    /// Time since the clock was created
    fn now(&self) -> Duration;

    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Final numbers of a run, reported when the loop exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub size: usize,
    pub frames: u64,
}

/// Fixed-timestep frame loop: input, update, render, then sleep off the rest
/// of the frame. Owns no simulation state beyond input debounce bookkeeping.
pub struct GameEngine<C: Clock> {
    clock: C,
    target_frame_duration: Duration,
    router: InputRouter,
    running: bool,
    frame_count: u32,
    total_frames: u64,
    stats_timestamp: Duration,
    last_frame_start: Option<Duration>,
}

impl<C: Clock> GameEngine<C> {
    pub fn new(clock: C, target_frame_duration: Duration) -> Self {
        GameEngine {
            clock,
            target_frame_duration,
            router: InputRouter::new(),
            running: true,
            frame_count: 0,
            total_frames: 0,
            stats_timestamp: Duration::ZERO,
            last_frame_start: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Run frames until the player quits.
    pub fn run<R, I, P>(&mut self, game: &mut GameState<R>, input: &mut I, presenter: &mut P) -> Result<RunSummary>
    where
        R: Rng,
        I: InputSource,
        P: Presenter,
    {
        self.running = true;
        self.stats_timestamp = self.clock.now();
        log::info!("Frame loop started, target frame {:?}", self.target_frame_duration);

        while self.running {
            self.run_frame(game, input, presenter)?;
        }

        log::info!("Frame loop stopped after {} frames", self.total_frames);
        Ok(RunSummary {
            score: game.score,
            size: game.size(),
            frames: self.total_frames,
        })
    }

    /// One iteration of the loop. Returns whether the loop should continue.
    pub fn run_frame<R, I, P>(&mut self, game: &mut GameState<R>, input: &mut I, presenter: &mut P) -> Result<bool>
    where
        R: Rng,
        I: InputSource,
        P: Presenter,
    {
        let frame_start = self.clock.now();
        let elapsed = self
            .last_frame_start
            .map(|last| frame_start.saturating_sub(last))
            .unwrap_or(self.target_frame_duration);
        self.last_frame_start = Some(frame_start);

        let mut events: Vec<GameEvent> = Vec::new();
        for input_event in input.poll_events()? {
            match input_event {
                InputEvent::Quit => self.running = false,
                InputEvent::KeyDown(key) => {
                    events.extend(game.exec_command(GameCommand::KeyPressed(key)));
                }
            }
        }

        for event in &events {
            match event {
                GameEvent::QuitRequested => self.running = false,
                GameEvent::GameRestarted => self.router.reset(),
                _ => {}
            }
        }

        if game.status == GameStatus::Playing {
            let snake = game.snake();
            if let Some(direction) = self.router.route_held(&*input, snake.heading(), snake.size(), frame_start) {
                events.extend(game.exec_command(GameCommand::Turn { direction }));
            }
            events.extend(game.advance(elapsed));
        }

        for event in &events {
            presenter.handle_event(event);
        }
        presenter.render(&game.view())?;

        let frame_end = self.clock.now();
        self.frame_count += 1;
        self.total_frames += 1;

        if frame_end.saturating_sub(self.stats_timestamp) >= STATS_INTERVAL {
            presenter.report_stats(game.score, self.frame_count);
            self.frame_count = 0;
            self.stats_timestamp = frame_end;
        }

        let frame_duration = frame_end.saturating_sub(frame_start);
        if frame_duration < self.target_frame_duration {
            self.clock.sleep(self.target_frame_duration - frame_duration);
        }

        Ok(self.running)
    }
}
