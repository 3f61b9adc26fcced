use common::{GameStatus, GameView};

use super::particles::Particle;
use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};

pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, view: &GameView<'_>, particles: &[Particle], config: &RenderConfig) -> CharGrid {
        let mut grid = CharGrid::new(view.width as usize, view.height as usize, config.chars_per_cell);

        // Nothing of the arena shows behind the start screen
        if view.status == GameStatus::StartScreen {
            return grid;
        }

        if view.status != GameStatus::GameOver && view.food.in_bounds(view.width, view.height) {
            let pattern = self.renderer.render_food();
            grid.set_cell(view.food.x as usize, view.food.y as usize, &pattern);
        }

        // Tail first so the head ends up on top
        let snake = view.snake;
        for (i, pos) in snake.body.iter().enumerate().rev() {
            if !pos.in_bounds(view.width, view.height) {
                continue;
            }
            let is_head = i == 0;
            let direction = if is_head { Some(snake.heading()) } else { None };
            let pattern = self.renderer.render_snake_segment(direction, is_head, snake.is_alive);
            grid.set_cell(pos.x as usize, pos.y as usize, &pattern);
        }

        let dims = config.chars_per_cell;
        for particle in particles {
            if particle.x < 0.0 || particle.y < 0.0 {
                continue;
            }
            let col = (particle.x * dims.horizontal as f32) as usize;
            let row = (particle.y * dims.vertical as f32) as usize;
            // Sparks never cover the snake or the food
            if grid.char_at(col, row) == Some(' ') {
                grid.set_char(col, row, self.renderer.render_particle(particle.intensity()));
            }
        }

        grid
    }
}
