//! Scene domain: marker components for entities owned by the scene root.

use bevy::prelude::*;

/// Anything spawned on scene mount; despawned on teardown
#[derive(Component, Debug)]
pub struct SceneEntity;

#[derive(Component, Debug)]
pub struct SceneCamera;

#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug)]
pub struct Obstacle;
