//! Driver settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::DEFAULT_DIAMETER;
use crate::error::{MemspaceError, Result, read_json};
use crate::sim::Bounds;

/// Simulation run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport members bounce inside
    pub viewport: Bounds,
    /// Size applied to every member once loaded
    pub member_diameter: f32,
    /// Speed given to every member at startup (pixels/second)
    pub initial_speed: f32,
    /// Give each member a random starting heading
    pub randomize_headings: bool,
    /// Placement RNG seed
    pub seed: u64,

    // === Frame loop ===
    /// Frames per second
    pub tick_rate_hz: f32,
    /// Length of the run (seconds)
    pub duration_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport: Bounds::default(),
            member_diameter: DEFAULT_DIAMETER,
            initial_speed: 60.0,
            randomize_headings: true,
            seed: 0x5EED,

            tick_rate_hz: 60.0,
            duration_secs: 5.0,
        }
    }
}

impl Settings {
    /// Seconds per frame
    pub fn tick_secs(&self) -> f32 {
        if self.tick_rate_hz > 0.0 {
            1.0 / self.tick_rate_hz
        } else {
            0.0
        }
    }

    /// Number of frames in the run
    pub fn total_ticks(&self) -> u64 {
        (self.duration_secs.max(0.0) * self.tick_rate_hz.max(0.0)).round() as u64
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = read_json(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(MemspaceError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::warn!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}
