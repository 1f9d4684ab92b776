//! Scene domain: obstacle layout data for the physics-driven cubes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scene::loader::ValidationError;

/// One loose cube placed on the circuit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObstacleDef {
    pub position: [f32; 3],
    /// Full extents along each axis
    pub size: [f32; 3],
    #[serde(default = "default_mass")]
    pub mass: f32,
}

fn default_mass() -> f32 {
    1.0
}

impl ObstacleDef {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn extents(&self) -> Vec3 {
        Vec3::from_array(self.size)
    }

    /// Problems with this obstacle; `index` is its position in the layout.
    pub fn problems(&self, index: usize) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.position.iter().any(|v| !v.is_finite()) {
            errors.push(ValidationError::new(
                "Obstacle",
                "position",
                format!("#{} has a non-finite coordinate", index),
            ));
        }
        if self.size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            errors.push(ValidationError::new(
                "Obstacle",
                "size",
                format!("#{} needs positive extents, got {:?}", index, self.size),
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            errors.push(ValidationError::new(
                "Obstacle",
                "mass",
                format!("#{} needs a positive mass, got {}", index, self.mass),
            ));
        }

        errors
    }
}

/// Wrapper matching the on-disk `{ "items": [...] }` shape.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ObstacleLayout {
    pub items: Vec<ObstacleDef>,
}

impl ObstacleLayout {
    pub fn validate(&self) -> Vec<ValidationError> {
        self.items
            .iter()
            .enumerate()
            .flat_map(|(index, obstacle)| obstacle.problems(index))
            .collect()
    }

    /// Drop obstacles that fail validation, keeping the rest in order.
    /// Returns how many were dropped.
    pub fn retain_valid(&mut self) -> usize {
        let before = self.items.len();
        let mut index = 0;
        self.items.retain(|obstacle| {
            let keep = obstacle.problems(index).is_empty();
            index += 1;
            keep
        });
        before - self.items.len()
    }
}
