use bevy::prelude::*;

use crate::math;

/// One clickable expansion opportunity, derived from the board.
///
/// Lives at an edge midpoint of a placed hexagon and points at the
/// unoccupied neighbor slot behind that edge. Markers are transient: the
/// whole set is rebuilt from [`HexBoard::markers`] after every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSpec {
    /// Where the "+" glyph is drawn.
    pub midpoint: Vec2,
    /// Center of the hexagon a click will create.
    pub target: Vec2,
}

/// The set of placed hexagon centers.
///
/// Centers are identified under the axis-wise tolerance of
/// [`math::same_center`]; no two members ever match each other. The board
/// only grows, except through [`HexBoard::reset`].
pub struct HexBoard {
    hex_size: f32,
    placed: Vec<Vec2>,
}

impl HexBoard {
    /// An empty board for hexagons with the given circumradius.
    pub fn new(hex_size: f32) -> Self {
        Self {
            hex_size,
            placed: Vec::new(),
        }
    }

    /// Clears everything and seeds a single hexagon at `center`.
    pub fn reset(&mut self, center: Vec2) {
        self.placed.clear();
        self.placed.push(center);
    }

    /// Adds a hexagon at `center` unless that slot is already occupied.
    ///
    /// Returns whether the board changed. Duplicate insertion (within
    /// tolerance) is absorbed silently; rapid successive clicks near a slot
    /// boundary must not corrupt the occupancy invariant.
    pub fn place(&mut self, center: Vec2) -> bool {
        if self.is_occupied(center) {
            return false;
        }
        self.placed.push(center);
        true
    }

    /// Whether a hexagon already sits at (or within tolerance of) `point`.
    pub fn is_occupied(&self, point: Vec2) -> bool {
        self.placed
            .iter()
            .any(|&c| math::same_center(c, point, self.hex_size))
    }

    /// Number of placed hexagons.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether no hexagon has been placed yet.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// The current expansion frontier.
    ///
    /// For every placed hexagon and each of its six edges, yields a marker at
    /// the edge midpoint iff the slot behind that edge is unoccupied. A shared
    /// edge between two placed hexagons therefore yields no marker from either
    /// side: each side's target is the other, occupied, hexagon.
    pub fn markers(&self) -> Vec<MarkerSpec> {
        let mut specs = Vec::new();
        for &center in &self.placed {
            for edge in 0..6 {
                let target = math::neighbor_center(center, self.hex_size, edge);
                if !self.is_occupied(target) {
                    specs.push(MarkerSpec {
                        midpoint: math::edge_midpoint(center, self.hex_size, edge),
                        target,
                    });
                }
            }
        }
        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 30.0;

    fn seeded() -> HexBoard {
        let mut board = HexBoard::new(R);
        board.reset(Vec2::ZERO);
        board
    }

    // ── reset / place ───────────────────────────────────────────────

    #[test]
    fn reset_seeds_a_single_hexagon() {
        let board = seeded();
        assert_eq!(board.len(), 1);
        assert!(board.is_occupied(Vec2::ZERO));
    }

    #[test]
    fn reset_discards_previous_growth() {
        let mut board = seeded();
        let target = board.markers()[0].target;
        assert!(board.place(target));

        board.reset(Vec2::new(100.0, 100.0));
        assert_eq!(board.len(), 1);
        assert!(!board.is_occupied(Vec2::ZERO));
        assert!(board.is_occupied(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn place_is_idempotent_for_the_same_center() {
        let mut board = seeded();
        assert!(!board.place(Vec2::ZERO));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn place_absorbs_near_duplicates_within_tolerance() {
        let mut board = seeded();
        let nudged = Vec2::splat(0.09 * R);
        assert!(!board.place(nudged), "near-duplicate should be a no-op");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn empty_board_reports_empty() {
        let board = HexBoard::new(R);
        assert!(board.is_empty());
        assert!(board.markers().is_empty());
    }

    // ── markers ─────────────────────────────────────────────────────

    #[test]
    fn single_hexagon_offers_six_markers() {
        let board = seeded();
        assert_eq!(board.markers().len(), 6);
    }

    #[test]
    fn no_marker_targets_an_occupied_slot() {
        let mut board = seeded();
        for _ in 0..4 {
            let target = board.markers()[0].target;
            assert!(board.place(target));
        }
        for spec in board.markers() {
            assert!(
                !board.is_occupied(spec.target),
                "marker at {:?} points at occupied {:?}",
                spec.midpoint,
                spec.target
            );
        }
    }

    #[test]
    fn two_adjacent_hexagons_offer_ten_markers() {
        // 6 + 6 minus the two mutually-facing slots on the shared edge.
        let mut board = seeded();
        let target = board.markers()[0].target;
        assert!(board.place(target));
        assert_eq!(board.len(), 2);
        assert_eq!(board.markers().len(), 10);
    }

    #[test]
    fn neighbor_has_no_marker_pointing_back() {
        let mut board = seeded();
        let target = board.markers()[0].target;
        assert!(board.place(target));

        for spec in board.markers() {
            assert!(
                !crate::math::same_center(spec.target, Vec2::ZERO, R),
                "marker still points back at the seed hexagon"
            );
        }
    }

    #[test]
    fn at_most_six_markers_per_hexagon() {
        let mut board = seeded();
        for _ in 0..6 {
            let target = board.markers()[0].target;
            board.place(target);
        }
        assert!(board.markers().len() <= board.len() * 6);
    }

    #[test]
    fn markers_sit_on_their_hexagons_edges() {
        let board = seeded();
        for spec in board.markers() {
            let dist = spec.midpoint.length();
            // Edge midpoints of the seed hexagon are (√3/2)·r from its center.
            assert!(
                (dist - R * 3f32.sqrt() / 2.0).abs() < 1e-3,
                "midpoint {:?} off the hexagon boundary",
                spec.midpoint
            );
        }
    }

    #[test]
    fn fully_surrounded_hexagon_offers_no_markers() {
        let mut board = seeded();
        for edge in 0..6 {
            board.place(crate::math::neighbor_center(Vec2::ZERO, R, edge));
        }
        assert_eq!(board.len(), 7);
        assert!(
            board
                .markers()
                .iter()
                .all(|m| !crate::math::same_center(m.target, Vec2::ZERO, R))
        );
        // The center hexagon itself contributes nothing to the frontier.
        let frontier: Vec<_> = board
            .markers()
            .iter()
            .map(|m| m.midpoint)
            .filter(|mid| mid.length() < R)
            .collect();
        assert!(frontier.is_empty(), "center edges still offered: {frontier:?}");
    }
}
