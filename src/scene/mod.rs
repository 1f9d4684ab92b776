//! Scene domain: the race scene root.
//!
//! Loads the scene settings and obstacle layout at boot, then for the
//! lifetime of `SceneState::Race` owns:
//! - the fixed camera and its ambient light
//! - the sun and fill lights
//! - the physics world's gravity and static ground
//! - the loose obstacle cubes

mod components;
mod layout;
mod lighting;
mod loader;
mod settings;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::SceneEntity;
pub use layout::ObstacleLayout;
pub use settings::SceneSettings;

use bevy::prelude::*;
use std::path::Path;

use crate::core::SceneState;
use crate::scene::lighting::spawn_light_rig;
use crate::scene::loader::{OBSTACLE_LAYOUT_PATH, SCENE_SETTINGS_PATH, load_layout, load_settings};
use crate::scene::spawn::{
    apply_gravity, cleanup_scene, spawn_camera, spawn_ground, spawn_obstacles,
};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .init_resource::<ObstacleLayout>()
            .add_systems(Startup, load_scene_config)
            .add_systems(
                OnEnter(SceneState::Race),
                (
                    apply_gravity,
                    spawn_camera,
                    spawn_light_rig,
                    spawn_ground,
                    spawn_obstacles,
                ),
            )
            .add_systems(OnExit(SceneState::Race), cleanup_scene);
    }
}

/// Read settings and layout from disk, falling back to defaults on failure.
fn load_scene_config(mut commands: Commands) {
    let settings = match load_settings(Path::new(SCENE_SETTINGS_PATH)) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            warn!("Using default scene settings");
            SceneSettings::default()
        }
    };
    for problem in settings.validate() {
        warn!("{}", problem);
    }
    let settings = settings.sanitized();

    let mut layout = match load_layout(Path::new(OBSTACLE_LAYOUT_PATH)) {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            warn!("Starting without obstacles");
            ObstacleLayout::default()
        }
    };
    for problem in layout.validate() {
        warn!("{}", problem);
    }
    let dropped = layout.retain_valid();
    if dropped > 0 {
        warn!("Skipped {} invalid obstacles", dropped);
    }

    info!(
        "Scene config loaded: {:?}, brightness {}, {} obstacles",
        settings.performance_mode,
        settings.brightness,
        layout.items.len()
    );

    commands.insert_resource(settings);
    commands.insert_resource(layout);
}
