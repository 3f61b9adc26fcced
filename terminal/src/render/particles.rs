use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Particles spawned when food is eaten
pub const FOOD_BURST_SIZE: usize = 15;

/// Downward acceleration in cells per second squared
const GRAVITY: f32 = 6.0;
const MIN_SPEED: f32 = 2.0;
const MAX_SPEED: f32 = 8.0;
const MIN_LIFE: f32 = 0.5;
const MAX_LIFE: f32 = 2.0;

/// A spark in grid coordinates (fractional cells)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.x += self.velocity_x * dt;
        self.y += self.velocity_y * dt;
        self.life -= dt;
        self.velocity_y += GRAVITY * dt;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining life as a fraction, used to fade the glyph
    pub fn intensity(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

pub struct ParticleSystem<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleSystem<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for ParticleSystem<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ParticleSystem<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Burst out of the centre of the given cell
    pub fn emit_food_particles(&mut self, cell_x: i16, cell_y: i16) {
        let origin_x = cell_x as f32 + 0.5;
        let origin_y = cell_y as f32 + 0.5;

        for _ in 0..FOOD_BURST_SIZE {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(MIN_SPEED..MAX_SPEED);
            let life = self.rng.gen_range(MIN_LIFE..MAX_LIFE);

            self.particles.push(Particle {
                x: origin_x,
                y: origin_y,
                velocity_x: angle.cos() * speed,
                velocity_y: angle.sin() * speed,
                life,
                max_life: life,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
