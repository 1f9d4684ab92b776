//! UI domain: in-race overlay reflecting the paused/finished flags.

mod overlay;


use bevy::prelude::*;

use crate::core::SceneState;
use crate::phase::{PhaseController, PhaseSet};
use crate::ui::overlay::{spawn_phase_overlay, update_phase_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SceneState::Race), spawn_phase_overlay)
            .add_systems(
                Update,
                update_phase_overlay
                    .after(PhaseSet)
                    .run_if(resource_exists_and_changed::<PhaseController>),
            );
    }
}
