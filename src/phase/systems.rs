//! Phase domain: systems wiring the controller to the phase store, the
//! wall clock, and the physics clock.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;

use crate::core::{FinishPauseElapsedEvent, GamePhase, RunFinishedEvent};
use crate::phase::controller::PhaseController;

pub(crate) fn mount_phase_controller(mut commands: Commands, phase: Res<State<GamePhase>>) {
    let controller = PhaseController::mount(*phase.get());
    debug!(
        "[PHASE] Mounted in {:?} (paused: {}, finished: {})",
        phase.get(),
        controller.paused(),
        controller.finished()
    );
    commands.insert_resource(controller);
}

pub(crate) fn teardown_phase_controller(
    mut commands: Commands,
    controller: Option<ResMut<PhaseController>>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if let Some(mut controller) = controller {
        if let Some(remaining) = controller.pending_pause_remaining() {
            debug!(
                "[PHASE] Cancelled pending finish pause on teardown ({:?} left)",
                remaining
            );
        }
        controller.teardown();
    }
    commands.remove_resource::<PhaseController>();

    // Nothing gates physics once the scene is gone
    physics_time.unpause();
}

/// Apply every published phase change, in order, to the controller.
pub(crate) fn handle_phase_transitions(
    mut transitions: MessageReader<StateTransitionEvent<GamePhase>>,
    controller: Option<ResMut<PhaseController>>,
    mut finished_events: MessageWriter<RunFinishedEvent>,
) {
    let Some(mut controller) = controller else {
        // Changes published while unmounted must not replay into the next mount
        transitions.clear();
        return;
    };

    for transition in transitions.read() {
        if transition.entered == transition.exited {
            continue;
        }
        let Some(phase) = transition.entered else {
            continue;
        };

        if controller.observe(phase) {
            info!("[PHASE] Run finished, freezing physics shortly");
            finished_events.write(RunFinishedEvent);
        }

        debug!(
            "[PHASE] {:?} -> {:?} (paused: {}, finished: {})",
            transition.exited,
            phase,
            controller.paused(),
            controller.finished()
        );
    }
}

pub(crate) fn tick_delayed_pause(
    mut controller: ResMut<PhaseController>,
    time: Res<Time<Real>>,
    mut elapsed_events: MessageWriter<FinishPauseElapsedEvent>,
) {
    // A controller mounted this frame has not seen any time pass yet
    if controller.is_added() || !controller.has_pending_pause() {
        return;
    }

    // Only flag the controller changed when the pause actually lands
    if controller.bypass_change_detection().tick(time.delta()) {
        controller.set_changed();
        elapsed_events.write(FinishPauseElapsedEvent);
    }
}

/// Mirror the controller's `paused` flag into the physics clock.
pub(crate) fn sync_physics_pause(
    controller: Res<PhaseController>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if controller.paused() == physics_time.is_paused() {
        return;
    }

    if controller.paused() {
        physics_time.pause();
        info!("[PHASE] Physics suspended");
    } else {
        physics_time.unpause();
        info!("[PHASE] Physics resumed");
    }
}
