mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod phase;
mod scene;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Circuit Rush".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        scene::ScenePlugin,
        phase::PhasePlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
