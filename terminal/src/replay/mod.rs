pub mod reader;
pub mod recorder;

use common::{GameEvent, GameStatus};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayMetadata {
    pub grid_width: u16,
    pub grid_height: u16,
    pub seed: Option<u64>,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
    pub final_score: u32,
    pub final_size: usize,
    pub final_status: GameStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampedEvent {
    pub frame: u64,
    pub timestamp: SystemTime,
    pub event: GameEvent,
}

pub struct ReplayData {
    pub metadata: ReplayMetadata,
    pub events: Vec<TimestampedEvent>,
}

impl ReplayData {
    fn count(&self, matches: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| matches(&e.event)).count()
    }

    pub fn food_eaten(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::FoodEaten { .. }))
    }

    pub fn deaths(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::SnakeDied))
    }

    pub fn restarts(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::GameRestarted))
    }

    /// One-line description for listings
    pub fn summary(&self, path: &Path) -> String {
        let duration = self
            .metadata
            .end_time
            .duration_since(self.metadata.start_time)
            .unwrap_or_default();
        format!(
            "{}: {}x{} grid, {:.1}s, {} events, {} food, {} deaths, {} restarts, final score {} size {}",
            path.display(),
            self.metadata.grid_width,
            self.metadata.grid_height,
            duration.as_secs_f32(),
            self.events.len(),
            self.food_eaten(),
            self.deaths(),
            self.restarts(),
            self.metadata.final_score,
            self.metadata.final_size,
        )
    }
}
