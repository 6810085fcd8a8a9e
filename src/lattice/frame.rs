//! Local coordinate frames
//!
//! Catalog data is written relative to a local origin with orientation
//! `(1, 0)`. A frame reinterprets those local `(x, y)` coefficients through a
//! placed tile's own basis: `origin + x·forward + y·transverse`.

use crate::lattice::point::Point;

/// Basis used to carry local catalog coordinates into global space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    origin: Point,
    forward: Point,
    transverse: Point,
}

impl Frame {
    /// Frame anchored at `origin` with transverse axis a sixth turn left of `orientation`
    pub const fn new(origin: Point, orientation: Point) -> Self {
        Self {
            origin,
            forward: orientation,
            transverse: orientation.left6(),
        }
    }

    /// Reflected frame whose transverse axis is a sixth turn right of `orientation`
    pub const fn mirrored(origin: Point, orientation: Point) -> Self {
        Self {
            origin,
            forward: orientation,
            transverse: orientation.right6(),
        }
    }

    /// Global origin of the frame
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Map a local position into global space
    pub fn apply(&self, local: Point) -> Point {
        self.origin + self.rotate(local)
    }

    /// Map a local direction into global space, ignoring the origin
    pub fn rotate(&self, local: Point) -> Point {
        self.forward * local.x + self.transverse * local.y
    }
}
