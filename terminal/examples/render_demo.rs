use common::{Direction, GameStatus, GameView, Position, Snake};
use terminal::render::{
    arena::ArenaRenderer,
    particles::ParticleSystem,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    let snake = Snake::with_body(
        20,
        10,
        [
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(5, 7),
            Position::new(4, 7),
            Position::new(3, 7),
        ],
        Direction::Up,
    );
    let view = GameView {
        snake: &snake,
        food: Position::new(10, 5),
        score: 4,
        status: GameStatus::Playing,
        width: 20,
        height: 10,
    };

    let mut particles = ParticleSystem::new();
    particles.emit_food_particles(14, 3);
    particles.update(0.1);

    println!("=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&view, &particles, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&view, &particles, CharDimensions::new(2, 1));

    println!("\n=== 3x2 Rendering (Large) ===");
    render_with_dimensions(&view, &particles, CharDimensions::new(3, 2));
}

fn render_with_dimensions(view: &GameView<'_>, particles: &ParticleSystem, char_dims: CharDimensions) {
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let char_grid = arena_renderer.render(view, particles.particles(), &RenderConfig::new(char_dims));
    let width = char_grid.physical_width();

    println!("Dimensions: {}x{} chars per cell", char_dims.horizontal, char_dims.vertical);
    println!("Physical size: {}x{} characters", width, char_grid.physical_height());

    println!("┌{}┐", "─".repeat(width));
    for line in char_grid.into_lines() {
        println!("│{}│", line);
    }
    println!("└{}┘", "─".repeat(width));
}
