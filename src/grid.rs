//! Hexagon grid: seed hexagon, expansion markers, click-to-grow.
//!
//! Owns the placed-hexagon set and its marker frontier; reacts to marker
//! clicks and to window resizes. All board mutation runs serially inside
//! this plugin's `Update` systems.

mod board;
mod entities;
mod systems;

use bevy::prelude::*;

use crate::AppState;
use board::HexBoard;
use entities::{GridState, HexTile, LastWindowSize, PlaceHex, PlusMarker};

/// Configuration for the hexagon grid.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GridConfig {
    /// Hexagon circumradius in world units; neighbor centers sit at twice this.
    pub hex_size: f32,
    /// Resize delta (either axis) that triggers a full grid reset.
    pub resize_threshold: f32,
    /// Click-to-marker distance within which a marker activates.
    pub marker_hit_radius: f32,
    /// Font size of the "+" marker glyph.
    pub marker_font_size: f32,
    /// Tile fill color.
    pub fill_color: Color,
    /// Tile outline color.
    pub outline_color: Color,
    /// "+" marker color.
    pub marker_color: Color,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_size: 30.0,
            resize_threshold: 20.0,
            marker_hit_radius: 12.0,
            marker_font_size: 18.0,
            fill_color: Color::WHITE,
            outline_color: Color::BLACK,
            marker_color: Color::BLACK,
            clear_color: Color::WHITE,
        }
    }
}

/// Grid plugin: camera + seed hexagon at startup, growth at runtime.
pub struct GridPlugin(pub GridConfig);

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GridConfig>()
            .register_type::<HexTile>()
            .register_type::<PlusMarker>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .insert_resource(GridState {
                board: HexBoard::new(self.0.hex_size),
            })
            .init_resource::<LastWindowSize>()
            .add_message::<PlaceHex>()
            .add_systems(Startup, systems::setup)
            .add_systems(
                Update,
                (
                    systems::read_clicks,
                    systems::apply_placements,
                    systems::handle_resize,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                systems::refresh_markers
                    .after(systems::handle_resize)
                    .run_if(resource_changed::<GridState>),
            )
            .add_systems(Update, systems::draw_outlines);

        app.add_systems(
            Update,
            systems::grid_stats.run_if(in_state(AppState::Inspecting)),
        );
    }
}
