//! Scene domain: tunable settings for the race scene root.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scene::loader::ValidationError;

/// Quality preset picked by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum PerformanceMode {
    /// Cheapest: no shadows, unlit obstacles
    Performance,
    #[default]
    Balanced,
    Quality,
}

impl PerformanceMode {
    pub fn shadows_enabled(self) -> bool {
        self != PerformanceMode::Performance
    }

    pub fn lit_obstacles(self) -> bool {
        self != PerformanceMode::Performance
    }

    /// Point lights only cast shadows at the highest preset
    pub fn point_light_shadows(self) -> bool {
        self == PerformanceMode::Quality
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneSettings {
    pub performance_mode: PerformanceMode,
    /// Extra white ambient light on top of the base tint (0.0 - 2.0)
    pub brightness: f32,
    /// Downward acceleration in m/s²
    pub gravity: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            performance_mode: PerformanceMode::Balanced,
            brightness: 0.5,
            gravity: 9.81,
        }
    }
}

pub const MAX_BRIGHTNESS: f32 = 2.0;

impl SceneSettings {
    /// Check value ranges. Returns an empty list when the settings are usable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(0.0..=MAX_BRIGHTNESS).contains(&self.brightness) {
            errors.push(ValidationError::new(
                "SceneSettings",
                "brightness",
                format!("{} is outside 0.0..={}", self.brightness, MAX_BRIGHTNESS),
            ));
        }

        if !self.gravity.is_finite() || self.gravity < 0.0 {
            errors.push(ValidationError::new(
                "SceneSettings",
                "gravity",
                format!("{} must be a non-negative number", self.gravity),
            ));
        }

        errors
    }

    /// Clamp out-of-range values back into something the scene can use.
    pub fn sanitized(mut self) -> Self {
        self.brightness = if self.brightness.is_finite() {
            self.brightness.clamp(0.0, MAX_BRIGHTNESS)
        } else {
            0.0
        };
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            self.gravity = SceneSettings::default().gravity;
        }
        self
    }
}
