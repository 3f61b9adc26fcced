use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::INITIAL_SNAKE_SPEED;
use crate::food::OccupancyQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Unit displacement in grid coordinates (y grows downwards)
    fn unit_vector(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i32) < width as i32 && (self.y as i32) < height as i32
    }
}

/// Why a snake stopped moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Boundary,
    SelfCollision,
}

/// Kinematic state of the player's snake.
///
/// `head_x`/`head_y` are authoritative; truncating them yields the occupied cell,
/// which is always `body[0]` after a completed step. The body is ordered head first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub head_x: f32,
    pub head_y: f32,
    pub direction: Direction,
    pub body: VecDeque<Position>,
    pub speed: f32,
    pub is_alive: bool,
    heading: Direction,
    growth_pending: bool,
    death_cause: Option<Collision>,
    grid_width: u16,
    grid_height: u16,
}

impl Snake {
    /// A single-segment snake in the middle of the grid, facing up.
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        let start = Position::new((grid_width / 2) as i16, (grid_height / 2) as i16);
        Self::with_body(grid_width, grid_height, [start], Direction::Up)
    }

    /// Builds a snake from explicit segments, head first.
    /// An empty iterator falls back to the centre cell.
    pub fn with_body(
        grid_width: u16,
        grid_height: u16,
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Self {
        let mut body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            body.push_back(Position::new((grid_width / 2) as i16, (grid_height / 2) as i16));
        }
        let head = body[0];

        Snake {
            head_x: head.x as f32,
            head_y: head.y as f32,
            direction,
            body,
            speed: INITIAL_SNAKE_SPEED,
            is_alive: true,
            heading: direction,
            growth_pending: false,
            death_cause: None,
            grid_width,
            grid_height,
        }
    }

    /// Cell under the truncated head position
    pub fn head(&self) -> Position {
        Position::new(self.head_x as i16, self.head_y as i16)
    }

    pub fn tail(&self) -> Position {
        self.body.back().copied().unwrap_or_else(|| self.head())
    }

    /// Number of segments
    pub fn size(&self) -> usize {
        self.body.len()
    }

    /// Direction of the last completed step.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn death_cause(&self) -> Option<Collision> {
        self.death_cause
    }

    pub fn is_growth_pending(&self) -> bool {
        self.growth_pending
    }

    /// The cell the head enters on the next step, which may lie outside the grid.
    pub fn next_cell(&self) -> Position {
        let (dx, dy) = self.direction.unit_vector();
        Position::new((self.head_x + dx) as i16, (self.head_y + dy) as i16)
    }

    pub fn grow_body(&mut self) {
        self.growth_pending = true;
    }

    /// Occupancy over the full current body. Unlike the movement check,
    /// the tail counts even if it is about to move.
    pub fn snake_cell(&self, x: i16, y: i16) -> bool {
        self.body.iter().any(|p| p.x == x && p.y == y)
    }

    /// Advance exactly one cell in `direction`.
    ///
    /// Leaving the grid or running into the body kills the snake and leaves
    /// head and body where they were.
    pub fn update(&mut self) {
        if !self.is_alive {
            return;
        }

        let (dx, dy) = self.direction.unit_vector();
        let new_x = self.head_x + dx;
        let new_y = self.head_y + dy;
        // Floor before casting so -0.5 cannot truncate back onto column 0
        let cell = Position::new(new_x.floor() as i16, new_y.floor() as i16);

        if !cell.in_bounds(self.grid_width, self.grid_height) {
            self.die(Collision::Boundary, cell);
            return;
        }

        // The tail moves out of the way this step unless we are growing
        let checked = if self.growth_pending {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        if self.body.iter().take(checked).any(|p| *p == cell) {
            self.die(Collision::SelfCollision, cell);
            return;
        }

        self.head_x = new_x;
        self.head_y = new_y;
        self.body.push_front(cell);
        if self.growth_pending {
            self.growth_pending = false;
        } else {
            self.body.pop_back();
        }
        self.heading = self.direction;
    }

    fn die(&mut self, cause: Collision, cell: Position) {
        log::debug!("Snake died: {:?} entering {:?}", cause, cell);
        self.is_alive = false;
        self.death_cause = Some(cause);
    }
}

impl OccupancyQuery for Snake {
    fn is_occupied(&self, position: Position) -> bool {
        self.snake_cell(position.x, position.y)
    }
}
