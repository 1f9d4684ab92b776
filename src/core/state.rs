//! Core domain: externally-owned state definitions for the race flow.

use bevy::prelude::*;

/// Game phase published by the race flow.
///
/// The scene root only ever reads this value; gameplay code (and the
/// developer hotkeys) writes it through `NextState<GamePhase>`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GamePhase {
    /// Before the first start, or any other phase without its own rule
    #[default]
    Ready,
    Playing,
    Paused,
    Ended,
}

/// Lifetime of the race scene. The scene root is mounted while in `Race`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SceneState {
    #[default]
    Boot,
    Race,
}
