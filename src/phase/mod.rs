//! Phase domain: derives the scene's paused/finished flags from the game
//! phase and gates the physics clock with them.

mod controller;
mod delay;
mod systems;


pub use controller::PhaseController;

use bevy::prelude::*;

use crate::core::SceneState;
use crate::phase::systems::{
    handle_phase_transitions, mount_phase_controller, sync_physics_pause,
    teardown_phase_controller, tick_delayed_pause,
};

/// Systems that update [`PhaseController`] each frame. Readers of the
/// controller should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhaseSet;

pub struct PhasePlugin;

impl Plugin for PhasePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SceneState::Race), mount_phase_controller)
            .add_systems(OnExit(SceneState::Race), teardown_phase_controller)
            .add_systems(
                Update,
                // Tick before handling changes so a pause armed this frame
                // only counts time that passes after it
                (
                    tick_delayed_pause.run_if(resource_exists::<PhaseController>),
                    handle_phase_transitions,
                    sync_physics_pause.run_if(resource_exists::<PhaseController>),
                )
                    .chain()
                    .in_set(PhaseSet),
            );
    }
}
