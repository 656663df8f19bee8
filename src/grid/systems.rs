use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::window::{PrimaryWindow, WindowResized};

use bevy_egui::egui;

use super::GridConfig;
use super::entities::{GridState, HexTile, LastWindowSize, PlaceHex, PlusMarker, TileAssets};
use crate::math;

/// Z layer for hexagon fill meshes.
const TILE_Z: f32 = 0.0;
/// Z layer for "+" markers, above the tiles they sit on.
const MARKER_Z: f32 = 1.0;

// ── Startup ─────────────────────────────────────────────────────────

/// Spawns the camera and shared tile assets, then seeds the board.
///
/// The 2D camera sits at the origin, so the window's world-space center is
/// `Vec2::ZERO`; the seed hexagon (and every reset) lands there.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut grid: ResMut<GridState>,
    mut last_size: ResMut<LastWindowSize>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cfg: Res<GridConfig>,
) {
    commands.spawn((Name::new("Camera"), Camera2d));

    let assets = TileAssets {
        mesh: meshes.add(build_hex_mesh()),
        fill: materials.add(ColorMaterial::from(cfg.fill_color)),
    };

    if let Ok(window) = windows.single() {
        last_size.0 = Some(Vec2::new(window.width(), window.height()));
    }

    grid.board.reset(Vec2::ZERO);
    spawn_tile(&mut commands, &assets, cfg.hex_size, Vec2::ZERO);
    info!("seeded grid at origin, hex_size {}", cfg.hex_size);

    commands.insert_resource(assets);
}

// ── Update: input ───────────────────────────────────────────────────

/// Translates left clicks into [`PlaceHex`] requests.
///
/// The cursor position is converted to world space through the 2D camera and
/// hit-tested against the live markers; the nearest marker within the hit
/// radius wins. Clicks that hit nothing are ignored.
pub fn read_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    markers: Query<(&PlusMarker, &Transform)>,
    cfg: Res<GridConfig>,
    mut placements: MessageWriter<PlaceHex>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else { return };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_tf)) = camera_q.single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(cam_tf, cursor) else {
        return;
    };

    let mut best: Option<(f32, Vec2)> = None;
    for (marker, tf) in &markers {
        let dist = tf.translation.truncate().distance(point);
        if dist <= cfg.marker_hit_radius && best.is_none_or(|(b, _)| dist < b) {
            best = Some((dist, marker.target));
        }
    }

    if let Some((_, target)) = best {
        placements.write(PlaceHex { target });
    }
}

// ── Update: board mutation ──────────────────────────────────────────

/// Drains [`PlaceHex`] requests and grows the board.
///
/// Requests are processed to completion, one at a time, in arrival order.
/// A target already occupied (stale marker, or a duplicate within the same
/// batch) is absorbed by the board and dropped here.
pub fn apply_placements(
    mut commands: Commands,
    mut placements: MessageReader<PlaceHex>,
    mut grid: ResMut<GridState>,
    assets: Res<TileAssets>,
    cfg: Res<GridConfig>,
) {
    for msg in placements.read() {
        if grid.board.place(msg.target) {
            spawn_tile(&mut commands, &assets, cfg.hex_size, msg.target);
            info!(
                "placed hexagon at ({:.1}, {:.1}), {} total",
                msg.target.x,
                msg.target.y,
                grid.board.len()
            );
        } else {
            debug!(
                "ignored placement at occupied ({:.1}, {:.1})",
                msg.target.x, msg.target.y
            );
        }
    }
}

/// Resets the grid when the window size jumps past the hysteresis threshold.
///
/// The comparison baseline is the size recorded at the last reset, so minor
/// window-manager jitter never accumulates into a reset. A reset despawns
/// every tile and reseeds a single hexagon at the window center.
pub fn handle_resize(
    mut commands: Commands,
    mut resizes: MessageReader<WindowResized>,
    mut grid: ResMut<GridState>,
    mut last_size: ResMut<LastWindowSize>,
    tiles: Query<Entity, With<HexTile>>,
    assets: Res<TileAssets>,
    cfg: Res<GridConfig>,
) {
    // A frame's resize batch collapses to its final size; intermediate
    // sizes never reach the hysteresis check.
    let Some(new_size) = resizes
        .read()
        .last()
        .map(|ev| Vec2::new(ev.width, ev.height))
    else {
        return;
    };
    if !math::should_reset(last_size.0, new_size, cfg.resize_threshold) {
        if last_size.0.is_none() {
            last_size.0 = Some(new_size);
        }
        return;
    }

    info!(
        "window resized to {:.0}x{:.0}, resetting grid",
        new_size.x, new_size.y
    );
    last_size.0 = Some(new_size);

    for entity in &tiles {
        commands.entity(entity).despawn();
    }
    grid.board.reset(Vec2::ZERO);
    spawn_tile(&mut commands, &assets, cfg.hex_size, Vec2::ZERO);
}

// ── Update: derived visuals ─────────────────────────────────────────

/// Rebuilds every "+" marker from the board.
///
/// Runs only when the board changed. Markers are pure derivation: despawn
/// them all, then respawn one per unoccupied slot.
pub fn refresh_markers(
    mut commands: Commands,
    grid: Res<GridState>,
    markers: Query<Entity, With<PlusMarker>>,
    cfg: Res<GridConfig>,
) {
    for entity in &markers {
        commands.entity(entity).despawn();
    }

    let specs = grid.board.markers();
    debug!("rebuilt {} markers", specs.len());
    for spec in specs {
        commands.spawn((
            PlusMarker {
                target: spec.target,
            },
            Name::new(format!("Plus({:.0},{:.0})", spec.target.x, spec.target.y)),
            Text2d::new("+"),
            TextFont {
                font_size: cfg.marker_font_size,
                ..default()
            },
            TextColor(cfg.marker_color),
            Transform::from_translation(spec.midpoint.extend(MARKER_Z)),
        ));
    }
}

/// Draws the black outline of every tile as a gizmo line strip.
pub fn draw_outlines(mut gizmos: Gizmos, tiles: Query<&HexTile>, cfg: Res<GridConfig>) {
    for tile in &tiles {
        let corners = math::hex_corners(tile.center, cfg.hex_size);
        let points = corners.iter().copied().chain(std::iter::once(corners[0]));
        gizmos.linestrip_2d(points, cfg.outline_color);
    }
}

/// Paints grid statistics into the egui background layer (debug state only).
pub fn grid_stats(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    grid: Res<GridState>,
    markers: Query<(), With<PlusMarker>>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    painter.text(
        egui::pos2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        format!(
            "hexagons: {}   markers: {}",
            grid.board.len(),
            markers.iter().count()
        ),
        egui::FontId::proportional(13.0),
        egui::Color32::DARK_GRAY,
    );
}

// ── Spawn helpers ───────────────────────────────────────────────────

fn spawn_tile(commands: &mut Commands, assets: &TileAssets, hex_size: f32, center: Vec2) {
    commands.spawn((
        HexTile { center },
        Name::new(format!("Hex({:.0},{:.0})", center.x, center.y)),
        Mesh2d(assets.mesh.clone()),
        MeshMaterial2d(assets.fill.clone()),
        Transform::from_translation(center.extend(TILE_Z))
            .with_scale(Vec3::new(hex_size, hex_size, 1.0)),
    ));
}

/// Triangle-fan mesh of a unit-circumradius flat-topped hexagon.
///
/// Vertex 0 is the center; tiles scale this to `hex_size` via their
/// transform so one mesh serves the whole grid.
fn build_hex_mesh() -> Mesh {
    let corners = math::hex_corners(Vec2::ZERO, 1.0);

    let mut positions = vec![[0.0, 0.0, 0.0]];
    positions.extend(corners.iter().map(|c| [c.x, c.y, 0.0]));
    let normals = vec![[0.0, 0.0, 1.0]; 7];
    let mut uvs = vec![[0.5, 0.5]];
    uvs.extend(corners.iter().map(|c| [(c.x + 1.0) / 2.0, (1.0 - c.y) / 2.0]));

    let mut indices: Vec<u16> = Vec::with_capacity(18);
    for i in 0..6u16 {
        indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % 6]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U16(indices))
}
