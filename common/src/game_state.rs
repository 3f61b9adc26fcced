use std::time::Duration;

use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::food::place_food;
use crate::{
    Direction, Key, MAX_FRAME_STALL, Position, REFERENCE_FRAMES_PER_SECOND, SPEED_INCREMENT,
    Snake,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    StartScreen,
    Playing,
    Paused,
    GameOver,
}

/// Outcome of a key press in a given status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Enter(GameStatus),
    Restart,
    Quit,
}

impl GameStatus {
    /// Per-status key handling. Movement keys are not handled here; they go
    /// through the input router while playing.
    pub fn on_key(self, key: Key) -> Transition {
        match self {
            GameStatus::StartScreen => Transition::Enter(GameStatus::Playing),
            GameStatus::Playing => match key {
                Key::Space => Transition::Enter(GameStatus::Paused),
                _ => Transition::Stay,
            },
            GameStatus::Paused => match key {
                Key::Space => Transition::Enter(GameStatus::Playing),
                Key::Escape => Transition::Quit,
                _ => Transition::Stay,
            },
            GameStatus::GameOver => match key {
                Key::Char('r') | Key::Char('R') => Transition::Restart,
                Key::Escape => Transition::Quit,
                _ => Transition::Stay,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// One simulation step: the snake advances exactly one cell.
    Tick,
    /// Already validated turn request
    Turn { direction: Direction },
    KeyPressed(Key),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StatusChanged { from: GameStatus, to: GameStatus },
    SnakeTurned { direction: Direction },
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    SnakeDied,
    GameRestarted,
    QuitRequested,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Arena {
    pub width: u16,
    pub height: u16,
    pub snake: Snake,
    pub food: Position,
}

/// Read-only snapshot handed to the presentation layer each frame
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub snake: &'a Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub width: u16,
    pub height: u16,
}

/// One play session: snake, food, score and lifecycle status.
///
/// The generator is owned by the session and reused for every food placement.
#[derive(Debug)]
pub struct GameState<R = StdRng> {
    pub arena: Arena,
    pub status: GameStatus,
    pub score: u32,
    step_progress: f32,
    rng: R,
}

impl GameState<StdRng> {
    /// Session seeded from OS entropy
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(width: u16, height: u16, mut rng: R) -> Result<Self> {
        ensure!(width > 0 && height > 0, "Grid must not be empty, got {}x{}", width, height);
        ensure!(
            width <= i16::MAX as u16 && height <= i16::MAX as u16,
            "Grid {}x{} exceeds the addressable range",
            width,
            height
        );
        ensure!(
            u32::from(width) * u32::from(height) > 1,
            "Grid {}x{} has no room for food next to the snake",
            width,
            height
        );

        let snake = Snake::new(width, height);
        let food = place_food(&mut rng, width, height, &snake);

        Ok(GameState {
            arena: Arena {
                width,
                height,
                snake,
                food,
            },
            status: GameStatus::StartScreen,
            score: 0,
            step_progress: 0.0,
            rng,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.arena.snake
    }

    pub fn size(&self) -> usize {
        self.arena.snake.size()
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            snake: &self.arena.snake,
            food: self.arena.food,
            score: self.score,
            status: self.status,
            width: self.arena.width,
            height: self.arena.height,
        }
    }

    pub fn exec_command(&mut self, command: GameCommand) -> Vec<GameEvent> {
        let mut out: Vec<GameEvent> = Vec::new();

        match command {
            GameCommand::Tick => self.step(&mut out),

            GameCommand::Turn { direction } => {
                let snake = &self.arena.snake;
                if self.status == GameStatus::Playing && snake.is_alive && snake.direction != direction {
                    self.apply_event(GameEvent::SnakeTurned { direction }, &mut out);
                }
            }

            GameCommand::KeyPressed(key) => match self.status.on_key(key) {
                Transition::Stay => {}
                Transition::Enter(to) => {
                    let from = self.status;
                    self.apply_event(GameEvent::StatusChanged { from, to }, &mut out);
                }
                Transition::Restart => self.restart(&mut out),
                Transition::Quit => out.push(GameEvent::QuitRequested),
            },
        }

        out
    }

    /// Per-frame update while playing. Accumulates `speed` over `elapsed`
    /// and runs one step per whole cell. `elapsed` is clamped to
    /// `MAX_FRAME_STALL` so a suspended process cannot fling the snake forward.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if self.status != GameStatus::Playing {
            return out;
        }

        let elapsed = elapsed.min(MAX_FRAME_STALL);
        self.step_progress += self.arena.snake.speed * elapsed.as_secs_f32() * REFERENCE_FRAMES_PER_SECOND;

        while self.step_progress >= 1.0 && self.status == GameStatus::Playing {
            self.step_progress -= 1.0;
            self.step(&mut out);
        }

        out
    }

    /// Full reset, only honoured from `GameOver`.
    pub fn restart_game(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        self.restart(&mut out);
        out
    }

    fn step(&mut self, out: &mut Vec<GameEvent>) {
        if self.status != GameStatus::Playing {
            return;
        }

        if !self.arena.snake.is_alive {
            self.enter_game_over(out);
            return;
        }

        let food = self.arena.food;
        if self.arena.snake.next_cell() == food {
            self.arena.snake.grow_body();
        }
        self.arena.snake.update();

        if !self.arena.snake.is_alive {
            self.enter_game_over(out);
            return;
        }

        if self.arena.snake.head() == food {
            self.apply_event(GameEvent::FoodEaten { position: food }, out);
            let position = place_food(
                &mut self.rng,
                self.arena.width,
                self.arena.height,
                &self.arena.snake,
            );
            self.apply_event(GameEvent::FoodSpawned { position }, out);
        }
    }

    fn enter_game_over(&mut self, out: &mut Vec<GameEvent>) {
        // Only the first transition fires the death event
        if self.status == GameStatus::Playing {
            log::info!(
                "Game over with score {} and length {} ({:?})",
                self.score,
                self.arena.snake.size(),
                self.arena.snake.death_cause()
            );
            self.apply_event(
                GameEvent::StatusChanged {
                    from: GameStatus::Playing,
                    to: GameStatus::GameOver,
                },
                out,
            );
            out.push(GameEvent::SnakeDied);
        }
    }

    fn restart(&mut self, out: &mut Vec<GameEvent>) {
        if self.status != GameStatus::GameOver {
            log::debug!("Ignoring restart while {:?}", self.status);
            return;
        }

        self.apply_event(GameEvent::GameRestarted, out);
        let position = place_food(
            &mut self.rng,
            self.arena.width,
            self.arena.height,
            &self.arena.snake,
        );
        self.apply_event(GameEvent::FoodSpawned { position }, out);
        self.apply_event(
            GameEvent::StatusChanged {
                from: GameStatus::GameOver,
                to: GameStatus::Playing,
            },
            out,
        );
    }

    pub fn apply_event(&mut self, event: GameEvent, out: &mut Vec<GameEvent>) {
        match &event {
            GameEvent::StatusChanged { from, to } => {
                log::debug!("Status {:?} -> {:?}", from, to);
                self.status = *to;
            }

            GameEvent::SnakeTurned { direction } => {
                self.arena.snake.direction = *direction;
            }

            GameEvent::FoodEaten { .. } => {
                self.score += 1;
                self.arena.snake.speed += SPEED_INCREMENT;
            }

            GameEvent::FoodSpawned { position } => {
                self.arena.food = *position;
            }

            GameEvent::GameRestarted => {
                self.arena.snake = Snake::new(self.arena.width, self.arena.height);
                self.score = 0;
                self.step_progress = 0.0;
            }

            GameEvent::SnakeDied | GameEvent::QuitRequested => {}
        }

        out.push(event);
    }
}
