//! Pure hexagon geometry, free of Bevy ECS dependencies.
//!
//! Flat-topped convention: corner `i` (0..5) of a hexagon with circumradius
//! `r` sits at angle `i * 60°`; edge `i` connects corners `i` and `i + 1`;
//! the neighbor behind edge `i` sits at distance `2r` along the mean angle
//! `(i + 0.5) * 60°`.

use bevy::prelude::Vec2;
use std::f32::consts::FRAC_PI_3;

/// The six corner points of a flat-topped hexagon.
///
/// Corner `i` is at `center + radius * (cos(i·60°), sin(i·60°))`.
pub fn hex_corners(center: Vec2, radius: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let angle = i as f32 * FRAC_PI_3;
        center + radius * Vec2::new(angle.cos(), angle.sin())
    })
}

/// Midpoint of edge `edge` (0..5), the average of its two corner points.
pub fn edge_midpoint(center: Vec2, radius: f32, edge: usize) -> Vec2 {
    let corners = hex_corners(center, radius);
    (corners[edge % 6] + corners[(edge + 1) % 6]) / 2.0
}

/// Center of the neighbor hexagon behind edge `edge` (0..5).
///
/// Adjacent flat-topped hexagon centers are `2 * radius` apart, in the
/// direction of the edge's mean corner angle.
pub fn neighbor_center(center: Vec2, radius: f32, edge: usize) -> Vec2 {
    let angle = (edge as f32 + 0.5) * FRAC_PI_3;
    center + 2.0 * radius * Vec2::new(angle.cos(), angle.sin())
}

/// Whether two centers identify the same grid slot.
///
/// Axis-wise rectangle test with tolerance `0.1 * radius` per axis. This is
/// deliberately not a Euclidean-distance check: a point offset diagonally by
/// just under the tolerance on both axes still matches.
pub fn same_center(a: Vec2, b: Vec2, radius: f32) -> bool {
    let tolerance = 0.1 * radius;
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Whether a window size change is large enough to warrant a grid reset.
///
/// Either axis moving strictly more than `threshold` away from `last`
/// triggers; smaller deltas are treated as window-manager jitter.
pub fn resize_exceeds(last: Vec2, new: Vec2, threshold: f32) -> bool {
    (new.x - last.x).abs() > threshold || (new.y - last.y).abs() > threshold
}

/// Resize-reset decision against an optional baseline.
///
/// With no baseline yet (the window had not reported a size at startup),
/// the answer is `false`: the caller seeds the baseline from `new` instead
/// of resetting a grid that was just built.
pub fn should_reset(last: Option<Vec2>, new: Vec2, threshold: f32) -> bool {
    last.is_some_and(|last| resize_exceeds(last, new, threshold))
}
