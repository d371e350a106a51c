//! Field configuration.
//!
//! Every key is optional; a missing key keeps the value from `constants.rs`.
//! The web front-end reads this as JSON from the canvas element.

use serde::Deserialize;
use thiserror::Error;

use crate::color::Rgba;
use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unrecognised color {0:?}")]
    Color(String),
    #[error("particle_count must be at least 1")]
    NoParticles,
    #[error("particle_count {0} exceeds the maximum of {max}", max = MAX_PARTICLE_COUNT)]
    TooManyParticles(usize),
    #[error("speed must be finite and non-negative, got {0}")]
    Speed(f64),
    #[error("speed {0} exceeds the maximum of {max}", max = MAX_SPEED)]
    SpeedTooLarge(f64),
    #[error("radius range [{min}, {max}) is empty or non-positive")]
    RadiusRange { min: f64, max: f64 },
    #[error("radius_max {0} exceeds the maximum of {max}", max = MAX_RADIUS)]
    RadiusTooLarge(f64),
    #[error("attraction_radius must be positive, got {0}")]
    AttractionRadius(f64),
    #[error("attraction_gain must be finite, got {0}")]
    AttractionGain(f64),
    #[error("accent_every must be at least 1")]
    AccentEvery,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Initial velocity components are drawn from `[-speed, speed]`.
    pub speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub attraction_radius: f64,
    pub attraction_gain: f64,
    pub background: Rgba,
    pub accent: Rgba,
    pub shade: Rgba,
    pub accent_every: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            speed: INITIAL_SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            attraction_radius: ATTRACTION_RADIUS,
            attraction_gain: ATTRACTION_GAIN,
            background: Rgba::from_array(BACKGROUND_RGBA),
            accent: Rgba::from_array(ACCENT_RGBA),
            shade: Rgba::from_array(SHADE_RGBA),
            accent_every: ACCENT_EVERY,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: FieldConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooManyParticles(self.particle_count));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Speed(self.speed));
        }
        if self.speed > MAX_SPEED {
            return Err(ConfigError::SpeedTooLarge(self.speed));
        }
        // NaN fails both comparisons, hence the negated form
        if !(self.radius_min > 0.0 && self.radius_max > self.radius_min)
            || !self.radius_max.is_finite()
        {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if self.radius_max > MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge(self.radius_max));
        }
        if !(self.attraction_radius > 0.0) {
            return Err(ConfigError::AttractionRadius(self.attraction_radius));
        }
        if !self.attraction_gain.is_finite() {
            return Err(ConfigError::AttractionGain(self.attraction_gain));
        }
        if self.accent_every == 0 {
            return Err(ConfigError::AccentEvery);
        }
        Ok(())
    }

    /// Palette entry for the particle at `index`.
    pub fn color_for(&self, index: usize) -> Rgba {
        if index % self.accent_every == 0 {
            self.accent
        } else {
            self.shade
        }
    }
}
