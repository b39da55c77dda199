//! Carousel tunables and their TOML representation.
//!
//! ```toml
//! autoplay_delay_ms = 8000
//! swipe_threshold = 50.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{AUTOPLAY_DELAY, SWIPE_THRESHOLD};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Time between automatic advances.
    pub autoplay_delay: Duration,
    /// Horizontal displacement a gesture must exceed to count as a swipe.
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: AUTOPLAY_DELAY,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    autoplay_delay_ms: Option<u64>,
    swipe_threshold: Option<f32>,
}

impl CarouselConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = Self::default();
        Ok(Self {
            autoplay_delay: file
                .autoplay_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.autoplay_delay),
            swipe_threshold: file.swipe_threshold.unwrap_or(defaults.swipe_threshold),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_autoplay_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_delay.is_zero() {
            return Err(Error::InvalidConfig(
                "autoplay delay must be greater than zero".to_string(),
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "swipe threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}
