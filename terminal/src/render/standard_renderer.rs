use common::Direction;

use super::traits::GameObjectRenderer;
use super::types::{CharDimensions, CharPattern};

/// Block-character look: solid head, shaded body, dimmed once dead.
pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    fn head_pattern(&self, direction: Option<Direction>, is_alive: bool) -> CharPattern {
        if !is_alive {
            return CharPattern::single('X', self.char_dims);
        }

        if self.char_dims.horizontal == 2 && self.char_dims.vertical == 1 {
            // Put the "eye" on the side we are heading to
            let chars = match direction {
                Some(Direction::Left) => vec!['▐', '█'],
                Some(Direction::Right) => vec!['█', '▌'],
                _ => vec!['█', '█'],
            };
            CharPattern::new(vec![chars])
        } else {
            CharPattern::single('█', self.char_dims)
        }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, direction: Option<Direction>, is_head: bool, is_alive: bool) -> CharPattern {
        if is_head {
            return self.head_pattern(direction, is_alive);
        }

        let body_char = if is_alive { '▓' } else { '░' };
        CharPattern::single(body_char, self.char_dims)
    }

    fn render_food(&self) -> CharPattern {
        if self.char_dims.horizontal == 2 && self.char_dims.vertical == 1 {
            CharPattern::new(vec![vec!['(', ')']])
        } else if self.char_dims.horizontal == 1 && self.char_dims.vertical == 1 {
            CharPattern::new(vec![vec!['●']])
        } else {
            // Checkerboard for larger cells
            let mut pattern = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
            for (y, row) in pattern.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + y) % 2 == 0 {
                        *cell = '●';
                    }
                }
            }
            CharPattern::new(pattern)
        }
    }

    fn render_particle(&self, intensity: f32) -> char {
        match intensity {
            i if i > 0.66 => '*',
            i if i > 0.33 => '+',
            _ => '.',
        }
    }
}
