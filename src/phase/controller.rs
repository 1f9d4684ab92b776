//! Phase domain: derivation of the paused/finished flags from the game phase.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::GamePhase;
use crate::phase::delay::DelayedPause;

/// Scene-root state derived from [`GamePhase`].
///
/// `paused` gates the physics clock, `finished` gates the end-of-run UI.
/// Both start out false and only live as long as the race scene is mounted.
#[derive(Resource, Debug, Default)]
pub struct PhaseController {
    paused: bool,
    finished: bool,
    /// At most one pending delayed pause; replacing it cancels the old one
    delayed_pause: Option<DelayedPause>,
}

impl PhaseController {
    /// Create a controller for a freshly mounted scene and derive the flags
    /// from the phase that is current at mount time.
    pub fn mount(current: GamePhase) -> Self {
        let mut controller = Self::default();
        controller.observe(current);
        controller
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn has_pending_pause(&self) -> bool {
        self.delayed_pause.is_some()
    }

    /// Time left before the pending delayed pause fires, if one is armed.
    pub fn pending_pause_remaining(&self) -> Option<Duration> {
        self.delayed_pause.as_ref().map(DelayedPause::remaining)
    }

    /// Re-derive both flags from an observed phase.
    ///
    /// Returns true when this observation concluded the run, i.e. `finished`
    /// went from false to true.
    pub fn observe(&mut self, phase: GamePhase) -> bool {
        let was_finished = self.finished;

        match phase {
            GamePhase::Playing => {
                self.paused = false;
                self.finished = false;
            }
            GamePhase::Paused => {
                self.paused = true;
            }
            GamePhase::Ended => {
                self.paused = false;
                self.finished = true;
            }
            GamePhase::Ready => {
                self.paused = false;
            }
        }

        // Every phase change while finished restarts the countdown
        if self.finished {
            self.arm_delayed_pause();
        } else {
            self.cancel_delayed_pause();
        }

        self.finished && !was_finished
    }

    /// Advance the pending delayed pause by wall-clock `delta`.
    /// Returns true if it fired on this tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(delayed) = self.delayed_pause.as_mut() else {
            return false;
        };

        if !delayed.tick(delta) {
            return false;
        }

        self.delayed_pause = None;
        self.paused = true;
        true
    }

    /// Cancel anything scheduled. Called when the scene is unmounted.
    pub fn teardown(&mut self) {
        self.cancel_delayed_pause();
    }

    fn arm_delayed_pause(&mut self) {
        self.cancel_delayed_pause();
        self.delayed_pause = Some(DelayedPause::default());
    }

    fn cancel_delayed_pause(&mut self) {
        self.delayed_pause = None;
    }
}
