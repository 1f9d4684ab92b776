//! Phase domain: the cancellable one-shot timer behind the post-finish pause.

use bevy::prelude::*;
use std::time::Duration;

/// How long physics keeps running after the run ends before it is frozen.
pub const FINISH_PAUSE_DELAY: Duration = Duration::from_millis(1000);

/// A pending "pause physics" action.
///
/// Owned by the [`PhaseController`](super::PhaseController); dropping the
/// handle cancels the action.
#[derive(Debug)]
pub struct DelayedPause {
    timer: Timer,
}

impl Default for DelayedPause {
    fn default() -> Self {
        Self::new(FINISH_PAUSE_DELAY)
    }
}

impl DelayedPause {
    pub fn new(delay: Duration) -> Self {
        Self {
            timer: Timer::new(delay, TimerMode::Once),
        }
    }

    /// Advance by `delta`. Returns true on the tick the delay elapses.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.timer.tick(delta).just_finished()
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}
