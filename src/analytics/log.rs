//! Append-only analytics log (JSONL format).

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::AnalyticsEvent;

/// Analytics events appended to a file, one JSON object per line.
pub struct AnalyticsLog {
    path: PathBuf,
    enabled: bool,
}

impl AnalyticsLog {
    /// Create an enabled log.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }

    /// Create a log that drops every event.
    pub fn disabled(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        Ok(())
    }

    /// Record an event followed by its funnel event.
    pub fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.ensure_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {:?}", self.path))?;

        for entry in [event.clone(), event.funnel_event()] {
            let json = serde_json::to_string(&entry)?;
            writeln!(file, "{}", json)?;
        }

        tracing::debug!("Logged analytics event {}", event.event_name);
        Ok(())
    }

    /// Every readable event, oldest first. Malformed lines are skipped.
    pub fn list_all(&self) -> Result<Vec<AnalyticsEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {:?}", self.path))?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(event) = serde_json::from_str::<AnalyticsEvent>(&line) {
                events.push(event);
            }
        }

        Ok(events)
    }

    /// The last `limit` events, oldest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AnalyticsEvent>> {
        let mut events = self.list_all()?;
        let skip = events.len().saturating_sub(limit);
        events.drain(..skip);
        Ok(events)
    }
}
