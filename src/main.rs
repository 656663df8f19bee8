#![warn(missing_docs)]
//! Hexagonal grid expansion toy.
//!
//! Seeds one flat-topped hexagon at the window center and surrounds it with
//! clickable "+" markers; clicking a marker grows the grid into that slot.
//! Tab toggles a debug overlay, Escape quits.

mod grid;
pub mod math;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
#[cfg(feature = "native")]
use clap::Parser;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Normal interaction — marker clicks grow the grid.
    #[default]
    Running,
    /// Debug overlay + world inspector active (Tab to toggle).
    Inspecting,
}

/// Command-line overrides for the grid configuration.
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(version, about = "Hexagonal grid expansion toy")]
struct Cli {
    /// Hexagon circumradius in world units.
    #[arg(long, default_value_t = 30.0)]
    hex_size: f32,
    /// Window resize delta (units) that triggers a grid reset.
    #[arg(long, default_value_t = 20.0)]
    resize_threshold: f32,
}

fn main() {
    #[cfg(feature = "native")]
    let config = {
        let cli = Cli::parse();
        grid::GridConfig {
            hex_size: cli.hex_size,
            resize_threshold: cli.resize_threshold,
            ..default()
        }
    };
    #[cfg(not(feature = "native"))]
    let config = grid::GridConfig::default();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hexagon Grid".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(grid::GridPlugin(config))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Inspecting)));

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            AppState::Running => AppState::Inspecting,
            AppState::Inspecting => AppState::Running,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
