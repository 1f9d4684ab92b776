//! Debug domain: developer shortcuts for driving the race phase without the
//! gameplay that normally publishes it.

mod hotkeys;


use bevy::prelude::*;

use crate::core::SceneState;
use crate::debug::hotkeys::handle_phase_hotkeys;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            handle_phase_hotkeys.run_if(in_state(SceneState::Race)),
        );
    }
}
