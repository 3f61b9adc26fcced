use std::time::Duration;

/// Default grid dimensions in cells
pub const DEFAULT_GRID_WIDTH: u16 = 32;
pub const DEFAULT_GRID_HEIGHT: u16 = 32;

/// Default render rate for the frame loop
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 60;

/// Frame rate that `Snake::speed` is expressed against.
/// A speed of 0.1 means one cell every ten reference frames (6 cells per second).
pub const REFERENCE_FRAMES_PER_SECOND: f32 = 60.0;

/// Starting speed in cells per reference frame
pub const INITIAL_SNAKE_SPEED: f32 = 0.1;

/// Speed added every time the snake eats
pub const SPEED_INCREMENT: f32 = 0.02;

/// Longest frame time credited to the simulation. Covers the slowest
/// supported frame rate (1 fps); anything longer is a stall and is cut.
pub const MAX_FRAME_STALL: Duration = Duration::from_secs(1);

/// Direction changes closer together than this are dropped
pub const DIRECTION_DEBOUNCE: Duration = Duration::from_millis(100);

/// Interval between throughput reports to the presentation layer
pub const STATS_INTERVAL: Duration = Duration::from_millis(1000);

/// Target frame duration for a given frames-per-second rate
pub fn frame_duration(frames_per_second: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(frames_per_second.max(1)))
}
