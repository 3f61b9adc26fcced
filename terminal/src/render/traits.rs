use common::Direction;

use super::types::{CharDimensions, CharPattern};

pub trait GameObjectRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    /// `direction` is only given for the head.
    fn render_snake_segment(&self, direction: Option<Direction>, is_head: bool, is_alive: bool) -> CharPattern;

    fn render_food(&self) -> CharPattern;

    /// Glyph for a particle with `intensity` in `0.0..=1.0`
    fn render_particle(&self, intensity: f32) -> char;
}
