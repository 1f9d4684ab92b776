//! Scene domain: tests for config parsing, validation, lighting helpers, and
//! scene mount/teardown.

use avian3d::prelude::*;
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::path::Path;

use super::ScenePlugin;
use super::components::{Ground, Obstacle, SceneCamera, SceneEntity};
use super::lighting::ambient_light;
use super::loader::{
    OBSTACLE_LAYOUT_PATH, SCENE_SETTINGS_PATH, load_layout, load_settings, parse_layout,
    parse_settings,
};
use super::layout::{ObstacleDef, ObstacleLayout};
use super::settings::{PerformanceMode, SceneSettings};
use crate::core::{CorePlugin, SceneState};
use crate::phase::PhasePlugin;
use crate::ui::UiPlugin;

fn cube(position: [f32; 3], size: [f32; 3], mass: f32) -> ObstacleDef {
    ObstacleDef {
        position,
        size,
        mass,
    }
}

// -----------------------------------------------------------------------------
// Settings tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_settings() {
    let settings = parse_settings(
        "scene.ron",
        "(performance_mode: Quality, brightness: 1.25, gravity: 20.0)",
    )
    .unwrap();

    assert_eq!(settings.performance_mode, PerformanceMode::Quality);
    assert_eq!(settings.brightness, 1.25);
    assert_eq!(settings.gravity, 20.0);
}

#[test]
fn test_parse_partial_settings_uses_defaults() {
    let settings = parse_settings("scene.ron", "(performance_mode: Performance)").unwrap();

    assert_eq!(settings.performance_mode, PerformanceMode::Performance);
    assert_eq!(settings.brightness, SceneSettings::default().brightness);
    assert_eq!(settings.gravity, SceneSettings::default().gravity);
}

#[test]
fn test_parse_unknown_mode_is_error() {
    let err = parse_settings("scene.ron", "(performance_mode: Ultra)").unwrap_err();

    assert_eq!(err.file, "scene.ron");
    assert!(err.to_string().starts_with("Failed to load scene.ron: Parse error"));
}

#[test]
fn test_default_settings_are_valid() {
    assert!(SceneSettings::default().validate().is_empty());
}

#[test]
fn test_out_of_range_settings_are_reported_and_sanitized() {
    let settings = SceneSettings {
        performance_mode: PerformanceMode::Balanced,
        brightness: 3.0,
        gravity: -1.0,
    };

    let errors = settings.validate();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["brightness", "gravity"]);

    let sanitized = settings.sanitized();
    assert_eq!(sanitized.brightness, 2.0);
    assert_eq!(sanitized.gravity, 9.81);
    assert!(sanitized.validate().is_empty());
}

#[test]
fn test_performance_mode_feature_gates() {
    assert!(!PerformanceMode::Performance.shadows_enabled());
    assert!(!PerformanceMode::Performance.lit_obstacles());
    assert!(PerformanceMode::Balanced.shadows_enabled());
    assert!(!PerformanceMode::Balanced.point_light_shadows());
    assert!(PerformanceMode::Quality.point_light_shadows());
}

#[test]
fn test_brightness_raises_ambient_light() {
    let dim = ambient_light(&SceneSettings {
        brightness: 0.0,
        ..Default::default()
    });
    let bright = ambient_light(&SceneSettings {
        brightness: 2.0,
        ..Default::default()
    });

    assert!(bright.brightness > dim.brightness);
}

// -----------------------------------------------------------------------------
// Obstacle layout tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_layout_with_default_mass() {
    let layout = parse_layout(
        "cubes.json",
        r#"{ "items": [ { "position": [1.0, 2.0, 3.0], "size": [2.0, 2.0, 2.0] } ] }"#,
    )
    .unwrap();

    assert_eq!(layout.items, vec![cube([1.0, 2.0, 3.0], [2.0, 2.0, 2.0], 1.0)]);
}

#[test]
fn test_parse_layout_rejects_malformed_json() {
    let err = parse_layout("cubes.json", r#"{ "items": [ { "position": [1.0] } ] }"#).unwrap_err();
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_layout_validation_reports_each_problem() {
    let layout = ObstacleLayout {
        items: vec![
            cube([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], 1.0),
            cube([0.0, 1.0, 0.0], [1.0, 0.0, 1.0], 1.0),
            cube([f32::NAN, 1.0, 0.0], [1.0, 1.0, 1.0], -2.0),
        ],
    };

    let errors = layout.validate();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["size", "position", "mass"]);
    assert!(errors[0].to_string().contains("#1"));
}

#[test]
fn test_retain_valid_keeps_order() {
    let mut layout = ObstacleLayout {
        items: vec![
            cube([0.0, 1.0, 0.0], [1.0, 1.0, 1.0], 1.0),
            cube([5.0, 1.0, 0.0], [1.0, 1.0, 1.0], 0.0),
            cube([9.0, 1.0, 0.0], [2.0, 2.0, 2.0], 3.0),
        ],
    };

    assert_eq!(layout.retain_valid(), 1);
    assert_eq!(layout.items.len(), 2);
    assert_eq!(layout.items[1].position, [9.0, 1.0, 0.0]);
}

// -----------------------------------------------------------------------------
// Shipped asset tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_settings_load_and_validate() {
    let settings = load_settings(Path::new(SCENE_SETTINGS_PATH)).unwrap();
    assert!(settings.validate().is_empty());
}

#[test]
fn test_shipped_layout_loads_and_validates() {
    let layout = load_layout(Path::new(OBSTACLE_LAYOUT_PATH)).unwrap();

    assert!(!layout.items.is_empty());
    assert!(layout.validate().is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_settings(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Scene mount and teardown tests
// -----------------------------------------------------------------------------

fn scene_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_resource::<Time<Physics>>()
        .add_plugins((CorePlugin, ScenePlugin, PhasePlugin, UiPlugin));

    app.update();
    app.update();
    app
}

fn set_scene(app: &mut App, state: SceneState) {
    app.world_mut()
        .resource_mut::<NextState<SceneState>>()
        .set(state);
    app.update();
}

fn count<F: QueryFilter>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, F>();
    query.iter(world).count()
}

#[test]
fn test_race_scene_sets_gravity_from_settings() {
    let app = scene_app();

    let settings = app.world().resource::<SceneSettings>();
    let gravity = app.world().resource::<Gravity>();
    assert_eq!(gravity.0, Vec3::NEG_Y * settings.gravity);
}

#[test]
fn test_race_scene_spawns_bouncy_low_friction_ground() {
    let mut app = scene_app();

    assert_eq!(count::<With<Ground>>(&mut app), 1);

    let world = app.world_mut();
    let mut query = world.query_filtered::<(&RigidBody, &Restitution, &Friction), With<Ground>>();
    for (body, restitution, friction) in query.iter(world) {
        assert_eq!(*body, RigidBody::Static);
        assert_eq!(restitution.coefficient, 0.9);
        assert_eq!(friction.dynamic_coefficient, 0.1);
    }
}

#[test]
fn test_race_scene_spawns_one_dynamic_body_per_obstacle() {
    let mut app = scene_app();
    let expected = app.world().resource::<ObstacleLayout>().items.len();
    assert!(expected > 0);

    assert_eq!(count::<With<Obstacle>>(&mut app), expected);

    let world = app.world_mut();
    let mut query = world.query_filtered::<&RigidBody, With<Obstacle>>();
    assert!(query.iter(world).all(|body| *body == RigidBody::Dynamic));
}

#[test]
fn test_race_scene_spawns_camera_and_light_rig() {
    let mut app = scene_app();

    assert_eq!(count::<(With<SceneCamera>, With<Camera3d>)>(&mut app), 1);
    assert_eq!(count::<With<DirectionalLight>>(&mut app), 1);
    assert_eq!(count::<With<PointLight>>(&mut app), 2);
}

#[test]
fn test_leaving_race_despawns_every_scene_entity() {
    let mut app = scene_app();
    assert!(count::<With<SceneEntity>>(&mut app) > 0);
    assert_eq!(count::<With<Text>>(&mut app), 1);

    set_scene(&mut app, SceneState::Boot);

    assert_eq!(count::<With<SceneEntity>>(&mut app), 0);
    // Overlay label goes with its parent
    assert_eq!(count::<With<Text>>(&mut app), 0);
}

#[test]
fn test_reentering_race_respawns_scene_once() {
    let mut app = scene_app();
    let expected = app.world().resource::<ObstacleLayout>().items.len();

    set_scene(&mut app, SceneState::Boot);
    set_scene(&mut app, SceneState::Race);

    assert_eq!(count::<With<Obstacle>>(&mut app), expected);
    assert_eq!(count::<With<Ground>>(&mut app), 1);
    assert_eq!(count::<With<SceneCamera>>(&mut app), 1);
}
