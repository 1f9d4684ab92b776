//! UI domain: paused/finished overlay driven by the phase controller.

use bevy::prelude::*;

use crate::phase::PhaseController;
use crate::scene::SceneEntity;

/// Marker for the overlay root (toggled visible/hidden)
#[derive(Component, Debug)]
pub struct PhaseOverlay;

/// Marker for the overlay's text
#[derive(Component, Debug)]
pub struct PhaseOverlayLabel;

/// Text to show for the given flags; `None` hides the overlay.
pub fn overlay_label(paused: bool, finished: bool) -> Option<&'static str> {
    match (paused, finished) {
        (_, true) => Some("FINISHED"),
        (true, false) => Some("PAUSED"),
        (false, false) => None,
    }
}

pub(crate) fn spawn_phase_overlay(mut commands: Commands) {
    commands
        .spawn((
            SceneEntity,
            PhaseOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Percent(35.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(100),
        ))
        .with_child((
            PhaseOverlayLabel,
            Text::new(""),
            TextFont {
                font_size: 72.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.95, 0.95)),
        ));
}

pub(crate) fn update_phase_overlay(
    controller: Res<PhaseController>,
    mut overlay_query: Query<&mut Visibility, With<PhaseOverlay>>,
    mut label_query: Query<&mut Text, With<PhaseOverlayLabel>>,
) {
    let label = overlay_label(controller.paused(), controller.finished());

    for mut visibility in &mut overlay_query {
        *visibility = if label.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    if let Some(label) = label {
        for mut text in &mut label_query {
            text.0 = label.to_string();
        }
    }
}
