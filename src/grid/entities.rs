use bevy::prelude::*;

use super::board::HexBoard;

/// Central resource holding the placed-hexagon set.
///
/// All mutation happens in [`super::systems::apply_placements`] and
/// [`super::systems::handle_resize`]; everything else derives from it.
#[derive(Resource)]
pub struct GridState {
    /// Encapsulated board with centers, occupancy, and marker derivation.
    pub board: HexBoard,
}

/// Marker component on hexagon tile entities.
#[derive(Component, Reflect)]
pub struct HexTile {
    /// World-space center of this hexagon.
    pub center: Vec2,
}

/// Marker component on "+" text entities.
///
/// Entities carrying this are despawned and respawned wholesale on every
/// board change; never treat one as durable.
#[derive(Component, Reflect)]
pub struct PlusMarker {
    /// Center of the hexagon a click on this marker creates.
    pub target: Vec2,
}

/// Shared mesh and material handles for hexagon tiles.
///
/// The mesh is a unit-circumradius fan; tiles scale it via their transform.
#[derive(Resource)]
pub struct TileAssets {
    /// Unit flat-topped hexagon fan mesh.
    pub mesh: Handle<Mesh>,
    /// Fill material shared by all tiles.
    pub fill: Handle<ColorMaterial>,
}

/// Window size recorded at the last grid reset, once one has been observed.
///
/// Resize events are compared against this, not against each other, so
/// repeated sub-threshold jitter cannot drift the baseline. `None` until a
/// real size is seen; the first event then seeds the baseline rather than
/// forcing a reset against a zero size.
#[derive(Resource, Default)]
pub struct LastWindowSize(pub Option<Vec2>);

/// Request to place a hexagon, written by the click handler.
///
/// Drained serially by [`super::systems::apply_placements`]; a target that
/// turns out occupied (stale marker, double click in one batch) is dropped.
#[derive(Message)]
pub struct PlaceHex {
    /// Center of the hexagon to create.
    pub target: Vec2,
}
