//! Scene domain: the fixed light rig around the circuit.

use bevy::color::Mix;
use bevy::prelude::*;

use crate::scene::components::SceneEntity;
use crate::scene::settings::SceneSettings;

const SUN_POSITION: Vec3 = Vec3::new(-100.0, 100.0, -100.0);
const SUN_ILLUMINANCE: f32 = 8_000.0;

const FILL_INTENSITY: f32 = 4_000_000.0;
const FILL_RANGE: f32 = 400.0;

/// Base ambient before the player's brightness setting is added
const BASE_AMBIENT: f32 = 200.0;
/// Ambient added per unit of `SceneSettings::brightness`
const BRIGHTNESS_AMBIENT: f32 = 500.0;

/// Combined ambient light for the camera: the base tint plus the
/// brightness-driven white contribution.
pub fn ambient_light(settings: &SceneSettings) -> AmbientLight {
    let base = Color::srgb_u8(0xdf, 0xdf, 0xe6).to_linear();
    let extra = settings.brightness * BRIGHTNESS_AMBIENT;
    let total = BASE_AMBIENT + extra;

    // Weight the tint by how much each contribution adds
    let white_share = extra / total;
    let color = base.mix(&LinearRgba::WHITE, white_share);

    AmbientLight {
        color: color.into(),
        brightness: total,
        ..default()
    }
}

pub(crate) fn spawn_light_rig(mut commands: Commands, settings: Res<SceneSettings>) {
    let mode = settings.performance_mode;

    commands.spawn((
        SceneEntity,
        DirectionalLight {
            color: Color::WHITE,
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: mode.shadows_enabled(),
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for (position, color) in [
        (Vec3::new(100.0, 100.0, 100.0), Color::srgb_u8(0x7f, 0x84, 0xd8)),
        (Vec3::new(-100.0, 100.0, -100.0), Color::srgb_u8(0x45, 0x43, 0x62)),
    ] {
        commands.spawn((
            SceneEntity,
            PointLight {
                color,
                intensity: FILL_INTENSITY,
                range: FILL_RANGE,
                shadows_enabled: mode.point_light_shadows(),
                ..default()
            },
            Transform::from_translation(position),
        ));
    }

    debug!("[SCENE] Light rig spawned ({:?})", mode);
}
