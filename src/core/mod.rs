//! Core domain: the phase store, scene lifecycle state, and run-flow events.

mod events;
mod state;
mod systems;

pub use events::{FinishPauseElapsedEvent, RunFinishedEvent};
pub use state::{GamePhase, SceneState};

use bevy::prelude::*;

use crate::core::systems::transition_to_race;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .init_state::<SceneState>()
            .add_message::<RunFinishedEvent>()
            .add_message::<FinishPauseElapsedEvent>()
            // Boot work (settings, layout) runs on Startup before this fires
            .add_systems(PostStartup, transition_to_race);
    }
}
