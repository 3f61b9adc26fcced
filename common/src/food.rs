use rand::Rng;

use crate::Position;

/// Read-only view of which grid cells are taken
pub trait OccupancyQuery {
    fn is_occupied(&self, position: Position) -> bool;
}

impl<F> OccupancyQuery for F
where
    F: Fn(Position) -> bool,
{
    fn is_occupied(&self, position: Position) -> bool {
        self(position)
    }
}

/// Pick a uniformly random free cell in `[0, width) x [0, height)`.
///
/// Rejection sampling against `occupancy`. The caller guarantees at least one
/// free cell exists; a full grid would never return.
pub fn place_food<R, O>(rng: &mut R, width: u16, height: u16, occupancy: &O) -> Position
where
    R: Rng,
    O: OccupancyQuery + ?Sized,
{
    loop {
        let position = Position {
            x: rng.gen_range(0..width) as i16,
            y: rng.gen_range(0..height) as i16,
        };

        if !occupancy.is_occupied(position) {
            log::debug!("Placed food at {:?}", position);
            return position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, PseudoRandom, Snake};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_stays_inside_the_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = |_: Position| false;
        for _ in 0..500 {
            let food = place_food(&mut rng, 7, 3, &empty);
            assert!(food.in_bounds(7, 3), "{:?} outside 7x3", food);
        }
    }

    #[test]
    fn food_avoids_every_segment() {
        let mut rng = PseudoRandom::new(12345);
        let body: Vec<Position> = (0..4).flat_map(|x| (0..4).map(move |y| Position::new(x, y))).collect();
        let mut snake = Snake::with_body(5, 4, body, Direction::Right);
        snake.body.retain(|p| *p != Position::new(3, 3));

        // Only column 4 and (3,3) are free
        for _ in 0..200 {
            let food = place_food(&mut rng, 5, 4, &snake);
            assert!(!snake.snake_cell(food.x, food.y));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(99);
        let only_free = Position::new(2, 1);
        let occupied = |p: Position| p != only_free;
        assert_eq!(place_food(&mut rng, 3, 3, &occupied), only_free);
    }

    #[test]
    fn covers_the_whole_grid_eventually() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty = |_: Position| false;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(place_food(&mut rng, 4, 4, &empty));
        }
        assert_eq!(seen.len(), 16);
    }
}
