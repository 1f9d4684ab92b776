//! Debug domain: keyboard shortcuts that publish phase values.

use bevy::prelude::*;

use crate::core::GamePhase;

/// Phase a hotkey publishes from `current`, or `None` if the key does
/// nothing there.
///
/// - `Escape`: toggle Playing/Paused
/// - `Enter`: start from Ready
/// - `F`: end the run
/// - `R`: restart
pub fn hotkey_phase(key: KeyCode, current: GamePhase) -> Option<GamePhase> {
    let next = match (key, current) {
        (KeyCode::Escape, GamePhase::Playing) => GamePhase::Paused,
        (KeyCode::Escape, GamePhase::Paused) => GamePhase::Playing,
        (KeyCode::Enter | KeyCode::NumpadEnter, GamePhase::Ready) => GamePhase::Playing,
        (KeyCode::KeyF, GamePhase::Playing | GamePhase::Paused) => GamePhase::Ended,
        (KeyCode::KeyR, _) => GamePhase::Playing,
        _ => return None,
    };

    (next != current).then_some(next)
}

pub(crate) fn handle_phase_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let current = *phase.get();

    // First key that does something wins this frame
    let next = keyboard
        .get_just_pressed()
        .find_map(|key| hotkey_phase(*key, current));

    if let Some(next) = next {
        info!("[DEBUG] Phase {:?} -> {:?}", current, next);
        next_phase.set(next);
    }
}
