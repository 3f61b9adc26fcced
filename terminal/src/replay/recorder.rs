use super::*;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;

/// Collects the events of a session and writes them out as a `.replay` file.
pub struct ReplayRecorder {
    output_dir: PathBuf,
    events: Vec<TimestampedEvent>,
    metadata: ReplayMetadata,
}

impl ReplayRecorder {
    pub fn new(output_dir: PathBuf, grid_width: u16, grid_height: u16, seed: Option<u64>) -> Self {
        Self {
            output_dir,
            events: Vec::new(),
            metadata: ReplayMetadata {
                grid_width,
                grid_height,
                seed,
                start_time: SystemTime::now(),
                end_time: SystemTime::now(),
                final_score: 0,
                final_size: 0,
                final_status: GameStatus::StartScreen,
            },
        }
    }

    pub fn record_event(&mut self, frame: u64, event: GameEvent) {
        tracing::debug!("Recording event at frame {}: {:?}", frame, event);
        self.events.push(TimestampedEvent {
            frame,
            timestamp: SystemTime::now(),
            event,
        });
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn set_final_state(&mut self, score: u32, size: usize, status: GameStatus) {
        self.metadata.final_score = score;
        self.metadata.final_size = size;
        self.metadata.final_status = status;
        self.metadata.end_time = SystemTime::now();
    }

    pub fn save(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).context("Failed to create replay output directory")?;

        let timestamp = self
            .metadata
            .start_time
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let filename = format!("session_{}.replay", timestamp);
        let filepath = self.output_dir.join(&filename);

        // Newline-delimited JSON, gzip compressed: metadata first, then one event per line
        let file = fs::File::create(&filepath)
            .with_context(|| format!("Failed to create replay file {:?}", filepath))?;
        let mut encoder = GzEncoder::new(file, Compression::default());

        writeln!(encoder, "{}", serde_json::to_string(&self.metadata)?)?;
        for event in &self.events {
            writeln!(encoder, "{}", serde_json::to_string(event)?)?;
        }

        encoder.finish()?;

        tracing::info!("Saved replay with {} events to {:?}", self.events.len(), filepath);
        Ok(filepath)
    }
}
