//! Kite geometry of hats
//!
//! The underlying grid is a tiling of hexagons, each split into six kites that
//! share the hexagon's centre. Hexagon centres sit on multiples of 6 in both
//! coordinates, and every hat covers exactly eight kites.

use crate::hat::extraction::Hat;
use crate::lattice::Point;

/// Kites covered by one hat
pub const HAT_KITE_COUNT: usize = 8;

/// Kite centres of the reference hat
pub const REFERENCE_KITES: [Point; HAT_KITE_COUNT] = [
    Point::new(-7, 5),
    Point::new(-5, 4),
    Point::new(-5, 1),
    Point::new(-4, -1),
    Point::new(-1, -1),
    Point::new(-2, 1),
    Point::new(-1, 2),
    Point::new(1, 1),
];

/// Moves from a kite to one of its neighbours
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KiteStep {
    /// Next kite anticlockwise around the same hexagon
    Left,
    /// Next kite clockwise around the same hexagon
    Right,
    /// Forward into the neighbouring hexagon, bearing left
    ForwardLeft,
    /// Forward into the neighbouring hexagon, bearing right
    ForwardRight,
}

impl KiteStep {
    /// All steps in table order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::ForwardLeft, Self::ForwardRight];
}

/// Round to the nearest multiple of 6, halves away from zero
pub const fn round6(x: i32) -> i32 {
    let sign = if x < 0 { -1 } else { 1 };
    sign * ((x * sign + 3) / 6 * 6)
}

/// Centre of the hexagon containing a kite
pub const fn hexagon_centre(kite: Point) -> Point {
    Point::new(round6(kite.x), round6(kite.y))
}

/// Centre of the kite reached by taking `step` from `kite`
pub fn step_kite(kite: Point, step: KiteStep) -> Point {
    let centre = hexagon_centre(kite);
    let offset = kite - centre;
    match step {
        KiteStep::Left => centre + offset.left6(),
        KiteStep::Right => centre + offset.right6(),
        KiteStep::ForwardLeft => kite + offset.left6() + offset,
        KiteStep::ForwardRight => kite + offset.right6() + offset,
    }
}

impl Hat {
    /// Centres of the eight kites this hat covers
    pub fn kite_centres(&self) -> [Point; HAT_KITE_COUNT] {
        let frame = self.frame();
        REFERENCE_KITES.map(|k| frame.apply(k))
    }
}
