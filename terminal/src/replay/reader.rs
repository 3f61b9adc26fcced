use super::*;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct ReplayReader;

impl ReplayReader {
    pub fn load_replay(path: &Path) -> Result<ReplayData> {
        let file =
            File::open(path).with_context(|| format!("Failed to open replay file: {:?}", path))?;
        let reader = BufReader::new(GzDecoder::new(file));
        let mut lines = reader.lines();

        let metadata_line = lines
            .next()
            .context("Replay file is empty")?
            .context("Failed to read metadata line")?;
        let metadata: ReplayMetadata =
            serde_json::from_str(&metadata_line).context("Failed to parse replay metadata")?;

        let mut events = Vec::new();
        for (i, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read event line {}", i + 2))?;
            if line.trim().is_empty() {
                continue;
            }
            let event: TimestampedEvent = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse event on line {}", i + 2))?;
            events.push(event);
        }

        Ok(ReplayData { metadata, events })
    }

    /// All `.replay` files under `dir`, newest first
    pub fn list_replays(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut replays: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read replay directory {:?}", dir))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension() == Some(OsStr::new("replay")))
            .collect();

        replays.sort_by_key(|path| {
            std::cmp::Reverse(
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH),
            )
        });

        Ok(replays)
    }
}
