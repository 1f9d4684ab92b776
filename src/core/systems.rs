//! Core domain: scene lifecycle systems.

use bevy::prelude::*;

use crate::core::state::SceneState;

pub(crate) fn transition_to_race(mut scene_state: ResMut<NextState<SceneState>>) {
    scene_state.set(SceneState::Race);
}
