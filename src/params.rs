/*
 * Field Parameters Module
 *
 * This module defines the FieldConfig struct that holds every tunable of the
 * particle field. It can be loaded from and saved to a JSON file, adjusted
 * live from the tuning panel, and validated before the engine accepts it.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // Density and spawning
    pub area_per_particle: f32,
    pub drift_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,

    // Pointer repulsion
    pub influence_radius: f32,
    pub repulsion_strength: f32,

    // Links
    pub link_divisor: f32,
    pub link_fade: f32,
    pub link_alpha: f32,
    pub link_width: f32,

    // Layer appearance
    pub canvas_opacity: f32,
    pub background: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15000.0,
            drift_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            influence_radius: 150.0,
            repulsion_strength: 3.0,
            link_divisor: 7.0,
            link_fade: 20000.0,
            link_alpha: 0.1,
            link_width: 1.0,
            canvas_opacity: 0.6,
            background: [5, 5, 5],
        }
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidConfig(format!("{name} must be finite and > 0, got {value}")));
    }
    Ok(())
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfig(format!("{name} must be finite and >= 0, got {value}")));
    }
    Ok(())
}

fn unit(name: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::InvalidConfig(format!("{name} must be within [0, 1], got {value}")));
    }
    Ok(())
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        positive("area_per_particle", self.area_per_particle)?;
        non_negative("drift_speed", self.drift_speed)?;
        positive("min_radius", self.min_radius)?;
        positive("max_radius", self.max_radius)?;
        if self.min_radius > self.max_radius {
            return Err(Error::InvalidConfig(format!(
                "min_radius ({}) exceeds max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        positive("influence_radius", self.influence_radius)?;
        non_negative("repulsion_strength", self.repulsion_strength)?;
        positive("link_divisor", self.link_divisor)?;
        positive("link_fade", self.link_fade)?;
        unit("link_alpha", self.link_alpha)?;
        positive("link_width", self.link_width)?;
        unit("canvas_opacity", self.canvas_opacity)?;
        Ok(())
    }

    /// True when switching to `other` changes how particles are spawned.
    pub fn needs_reseed(&self, other: &FieldConfig) -> bool {
        self.area_per_particle != other.area_per_particle
            || self.drift_speed != other.drift_speed
            || self.min_radius != other.min_radius
            || self.max_radius != other.max_radius
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: FieldConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    // Slider ranges for the tuning panel
    pub fn get_area_range() -> RangeInclusive<f32> {
        2000.0..=60000.0
    }

    pub fn get_drift_range() -> RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> RangeInclusive<f32> {
        0.5..=10.0
    }

    pub fn get_influence_range() -> RangeInclusive<f32> {
        10.0..=500.0
    }

    pub fn get_strength_range() -> RangeInclusive<f32> {
        0.0..=20.0
    }

    pub fn get_divisor_range() -> RangeInclusive<f32> {
        2.0..=20.0
    }

    pub fn get_fade_range() -> RangeInclusive<f32> {
        1000.0..=100000.0
    }
}

/// Toggles owned by the window rather than the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSettings {
    pub show_controls: bool,
    pub show_debug: bool,
    pub paused: bool,
}
