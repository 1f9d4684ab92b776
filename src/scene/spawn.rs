//! Scene domain: spawning and cleanup of the scene root's entities.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::scene::components::{Ground, Obstacle, SceneCamera, SceneEntity};
use crate::scene::layout::ObstacleLayout;
use crate::scene::lighting::ambient_light;
use crate::scene::settings::SceneSettings;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 60.0, 80.0);

/// Half-size of the invisible ground slab under the circuit
const GROUND_HALF_EXTENT: f32 = 100.0;
const GROUND_THICKNESS: f32 = 0.2;
const GROUND_RESTITUTION: f32 = 0.9;
const GROUND_FRICTION: f32 = 0.1;

pub(crate) fn spawn_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    // Fixed view on the origin; the chase camera belongs to the vehicle
    commands.spawn((
        SceneEntity,
        SceneCamera,
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ambient_light(&settings),
    ));
}

pub(crate) fn apply_gravity(mut commands: Commands, settings: Res<SceneSettings>) {
    commands.insert_resource(Gravity(Vec3::NEG_Y * settings.gravity));
}

pub(crate) fn spawn_ground(mut commands: Commands) {
    commands.spawn((
        SceneEntity,
        Ground,
        Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(
            GROUND_HALF_EXTENT * 2.0,
            GROUND_THICKNESS,
            GROUND_HALF_EXTENT * 2.0,
        ),
        Restitution::new(GROUND_RESTITUTION),
        Friction::new(GROUND_FRICTION),
    ));
}

pub(crate) fn spawn_obstacles(
    mut commands: Commands,
    layout: Res<ObstacleLayout>,
    settings: Res<SceneSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.35, 0.2),
        unlit: !settings.performance_mode.lit_obstacles(),
        ..default()
    });

    for obstacle in &layout.items {
        let extents = obstacle.extents();
        commands.spawn((
            SceneEntity,
            Obstacle,
            Mesh3d(meshes.add(Cuboid::from_size(extents))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(obstacle.translation()),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::cuboid(extents.x, extents.y, extents.z),
                Mass(obstacle.mass),
            ),
        ));
    }

    info!("[SCENE] Spawned {} obstacles", layout.items.len());
}

pub(crate) fn cleanup_scene(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("[SCENE] Despawned {} scene entities", count);
}
