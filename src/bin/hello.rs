//! "Hello World" button demo.
//!
//! A window with a single button; clicking it logs `Hello, World!`.

use bevy::prelude::*;
use bevy_egui::{EguiContext, EguiPlugin, EguiPrimaryContextPass, egui};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hello World App".into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_systems(Startup, spawn_camera)
    .add_systems(EguiPrimaryContextPass, hello_ui);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn hello_ui(mut egui_ctx: Query<&mut EguiContext>) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    egui::CentralPanel::default().show(ctx.get_mut(), |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            if ui.button("Hello World").clicked() {
                info!("Hello, World!");
            }
        });
    });
}
