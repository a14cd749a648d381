//! Planner settings
//!
//! Loaded once at startup from an optional JSON file; every field has a
//! default so a partial file is fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::feed::{BallFeed, RandomFeed, SampleFeed};
use crate::plan::RatingPolicy;

/// Where ball positions come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedSource {
    /// The fixed sample frame
    #[default]
    Sample,
    /// Seeded random layouts, one per tick
    Random { seed: u64, absent_chance: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which end of the rating scale wins
    pub rating_policy: RatingPolicy,

    // === Device link ===
    pub device: String,
    pub port: u16,
    pub feed: FeedSource,

    // === Driver loop ===
    /// Poll rate
    pub poll_hz: u32,
    /// Ticks to run before exiting
    pub ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rating_policy: RatingPolicy::WidestMargin,

            device: "/dev/foo".to_string(),
            port: 9000,
            feed: FeedSource::Sample,

            poll_hz: 60,
            ticks: 1,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Read settings if a path is given, otherwise (or on failure) use defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Could not load settings ({}), using defaults", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Seconds between polls
    pub fn poll_interval(&self) -> f32 {
        1.0 / self.poll_hz.max(1) as f32
    }

    /// Build the configured ball feed
    pub fn open_feed(&self) -> Box<dyn BallFeed> {
        match &self.feed {
            FeedSource::Sample => Box::new(SampleFeed::new(self.device.clone(), self.port)),
            FeedSource::Random {
                seed,
                absent_chance,
            } => Box::new(RandomFeed::new(*seed, *absent_chance)),
        }
    }
}
