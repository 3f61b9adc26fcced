use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::{DEFAULT_FRAMES_PER_SECOND, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

use crate::render::types::{CharDimensions, RenderConfig};

/// Snake in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "snakegame-terminal", version)]
pub struct Config {
    /// Grid width in cells
    #[arg(long, env = "SNAKEGAME_GRID_WIDTH", default_value_t = DEFAULT_GRID_WIDTH,
          value_parser = clap::value_parser!(u16).range(2..=512))]
    pub grid_width: u16,

    /// Grid height in cells
    #[arg(long, env = "SNAKEGAME_GRID_HEIGHT", default_value_t = DEFAULT_GRID_HEIGHT,
          value_parser = clap::value_parser!(u16).range(2..=512))]
    pub grid_height: u16,

    /// Target frames per second
    #[arg(long, env = "SNAKEGAME_FPS", default_value_t = DEFAULT_FRAMES_PER_SECOND,
          value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Terminal columns per grid cell
    #[arg(long, env = "SNAKEGAME_CELL_WIDTH", default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(1..=4))]
    pub cell_width: u8,

    /// Terminal rows per grid cell
    #[arg(long, env = "SNAKEGAME_CELL_HEIGHT", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(1..=4))]
    pub cell_height: u8,

    /// Seed for food placement; random when omitted
    #[arg(long, env = "SNAKEGAME_SEED")]
    pub seed: Option<u64>,

    /// Where log output goes while the game owns the screen
    #[arg(long, env = "SNAKEGAME_LOG_FILE", default_value = "snakegame.log")]
    pub log_file: PathBuf,

    /// Save a replay of the session into this directory
    #[arg(long, env = "SNAKEGAME_RECORD_DIR")]
    pub record_dir: Option<PathBuf>,

    /// Disable the terminal bell
    #[arg(long, env = "SNAKEGAME_MUTE")]
    pub mute: bool,

    /// Print a summary of a replay file (or every replay in a directory) and exit
    #[arg(long, value_name = "PATH")]
    pub inspect: Option<PathBuf>,
}

impl Config {
    pub fn frame_duration(&self) -> Duration {
        common::frame_duration(self.fps)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(CharDimensions::new(self.cell_width as usize, self.cell_height as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let config = Config::try_parse_from(["snakegame-terminal"]).unwrap();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
        assert_eq!(config.render_config().chars_per_cell, CharDimensions::new(2, 1));
        assert!(config.seed.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "snakegame-terminal",
            "--grid-width",
            "12",
            "--fps",
            "30",
            "--seed",
            "99",
            "--mute",
        ])
        .unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.frame_duration(), Duration::from_millis(33));
        assert_eq!(config.seed, Some(99));
        assert!(config.mute);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Config::try_parse_from(["snakegame-terminal", "--fps", "0"]).is_err());
        assert!(Config::try_parse_from(["snakegame-terminal", "--grid-width", "1"]).is_err());
        assert!(Config::try_parse_from(["snakegame-terminal", "--cell-width", "9"]).is_err());
    }
}
