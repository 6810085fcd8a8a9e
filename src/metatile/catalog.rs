//! Fixed per-type data for the four metatile shapes
//!
//! Every table is written in the local frame of a metatile whose vertex #0 is
//! at the origin with orientation `(1, 0)`. Expanded polygons describe the same
//! shape one generation larger; they are combinatorially identical to the
//! unexpanded polygon but slightly distorted, which is why expansion has to
//! discover placements by propagation.

use crate::io::error::{TilingError, invalid_parameter};
use crate::lattice::Point;
use std::fmt;
use std::str::FromStr;

/// Largest vertex count of any metatile polygon
pub const MAX_VERTICES: usize = 6;
/// Largest number of metatiles meeting at one vertex
pub const MAX_VERTEX_DEGREE: usize = 3;
/// Largest number of children in any substitution
pub const MAX_CHILDREN: usize = 13;
/// Largest number of hats inside one metatile
pub const MAX_HATS: usize = 4;
/// Largest number of parents that can share one child
pub const MAX_LINEAGE: usize = 4;

/// The four metatile shapes of the hat substitution system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetatileType {
    /// Hexagonal metatile holding four hats, one of them reflected
    H,
    /// Triangular metatile holding a single hat
    T,
    /// Parallelogram metatile holding two hats
    P,
    /// Pentagonal "fylfot" metatile holding two hats
    F,
}

impl MetatileType {
    /// Every metatile type in table order
    pub const ALL: [Self; 4] = [Self::H, Self::T, Self::P, Self::F];

    /// Position of this type in table order
    pub const fn index(self) -> usize {
        match self {
            Self::H => 0,
            Self::T => 1,
            Self::P => 2,
            Self::F => 3,
        }
    }

    /// Single-letter name
    pub const fn letter(self) -> char {
        match self {
            Self::H => 'H',
            Self::T => 'T',
            Self::P => 'P',
            Self::F => 'F',
        }
    }

    /// Static shape data for this type
    pub const fn shape(self) -> &'static MetatileShape {
        match self {
            Self::H => &SHAPE_H,
            Self::T => &SHAPE_T,
            Self::P => &SHAPE_P,
            Self::F => &SHAPE_F,
        }
    }

    /// Local vertex polygon at the current scale
    pub const fn vertices(self) -> &'static [Point] {
        self.shape().vertices
    }

    /// Local vertex polygon one generation larger
    pub const fn expanded_vertices(self) -> &'static [Point] {
        self.shape().expanded
    }

    /// Local substitution list
    pub const fn children(self) -> &'static [ChildPlacement] {
        self.shape().children
    }

    /// Local hat templates
    pub const fn hat_templates(self) -> &'static [HatTemplate] {
        self.shape().hats
    }

    /// Child counts per type, indexed by [`MetatileType::index`]
    pub fn child_histogram(self) -> [usize; 4] {
        let mut histogram = [0; 4];
        for child in self.children() {
            if let Some(count) = histogram.get_mut(child.kind.index()) {
                *count += 1;
            }
        }
        histogram
    }
}

impl fmt::Display for MetatileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for MetatileType {
    type Err = TilingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H" => Ok(Self::H),
            "T" => Ok(Self::T),
            "P" => Ok(Self::P),
            "F" => Ok(Self::F),
            _ => Err(invalid_parameter(
                "metatile type",
                &s,
                &"expected one of H, T, P, F",
            )),
        }
    }
}

/// A child metatile in its parent's local frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildPlacement {
    /// Type of the child
    pub kind: MetatileType,
    /// Local position of the child's vertex #0
    pub start: Point,
    /// Local orientation of the child
    pub orientation: Point,
}

/// A hat in its metatile's local frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HatTemplate {
    /// Local position of the hat's vertex #0
    pub start: Point,
    /// Local orientation of the hat
    pub orientation: Point,
    /// Whether this is the reflected hat
    pub reversed: bool,
}

/// Complete static description of one metatile type
#[derive(Debug)]
pub struct MetatileShape {
    /// Polygon at the current scale
    pub vertices: &'static [Point],
    /// Polygon one generation larger, vertex for vertex
    pub expanded: &'static [Point],
    /// Substitution list
    pub children: &'static [ChildPlacement],
    /// Hats contained in the metatile
    pub hats: &'static [HatTemplate],
}

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

const fn child(kind: MetatileType, start: Point, orientation: Point) -> ChildPlacement {
    ChildPlacement {
        kind,
        start,
        orientation,
    }
}

const fn hat(start: Point, orientation: Point, reversed: bool) -> HatTemplate {
    HatTemplate {
        start,
        orientation,
        reversed,
    }
}

use MetatileType::{F, H, P, T};

const SHAPE_H: MetatileShape = MetatileShape {
    vertices: &[p(0, 0), p(4, -2), p(12, 6), p(10, 10), p(-6, 18), p(-8, 16)],
    expanded: &[
        p(0, 0),
        p(12, -6),
        p(30, 12),
        p(24, 24),
        p(-12, 42),
        p(-18, 36),
    ],
    children: &[
        child(H, p(-4, 20), p(1, 0)),
        child(H, p(2, 2), p(1, 0)),
        child(H, p(8, 26), p(0, -1)),
        child(T, p(6, 24), p(-1, 0)),
        child(P, p(-8, 16), p(1, 0)),
        child(P, p(4, 34), p(0, -1)),
        child(P, p(6, 0), p(1, -1)),
        child(F, p(-10, 38), p(-1, 1)),
        child(F, p(-10, 44), p(0, -1)),
        child(F, p(-4, 2), p(1, 0)),
        child(F, p(2, 2), p(0, -1)),
        child(F, p(26, 14), p(1, 0)),
        child(F, p(32, 8), p(-1, 1)),
    ],
    hats: &[
        hat(p(6, 0), p(1, 0), false),
        hat(p(6, 6), p(0, -1), false),
        hat(p(0, 12), p(1, 0), false),
        hat(p(0, 6), p(-1, 0), true),
    ],
};

const SHAPE_T: MetatileShape = MetatileShape {
    vertices: &[p(0, 0), p(6, 6), p(-6, 12)],
    expanded: &[p(0, 0), p(12, 12), p(-12, 24)],
    children: &[
        child(H, p(10, 10), p(-1, 1)),
        child(P, p(-6, 0), p(1, 0)),
        child(P, p(8, 14), p(0, 1)),
        child(P, p(18, 6), p(-1, 1)),
        child(F, p(-14, 34), p(-1, 0)),
        child(F, p(-8, -2), p(1, -1)),
        child(F, p(22, 4), p(0, 1)),
    ],
    hats: &[hat(p(-2, 10), p(-1, 1), false)],
};

const SHAPE_P: MetatileShape = MetatileShape {
    vertices: &[p(0, 0), p(4, 4), p(-4, 20), p(-8, 16)],
    expanded: &[p(0, 0), p(14, 8), p(-4, 44), p(-18, 36)],
    children: &[
        child(H, p(4, 22), p(0, 1)),
        child(H, p(10, 10), p(-1, 1)),
        child(P, p(-6, 0), p(1, 0)),
        child(P, p(6, 24), p(1, 0)),
        child(P, p(8, 14), p(0, 1)),
        child(F, p(-20, 40), p(1, -1)),
        child(F, p(-14, 34), p(-1, 0)),
        child(F, p(-8, -2), p(1, -1)),
        child(F, p(4, 46), p(-1, 1)),
        child(F, p(10, 10), p(1, 0)),
        child(F, p(16, 4), p(-1, 1)),
    ],
    hats: &[
        hat(p(-2, 10), p(-1, 1), false),
        hat(p(-2, 16), p(0, 1), false),
    ],
};

const SHAPE_F: MetatileShape = MetatileShape {
    vertices: &[p(0, 0), p(4, -2), p(6, 0), p(-2, 16), p(-6, 12)],
    expanded: &[p(0, 0), p(14, -4), p(18, 6), p(0, 42), p(-14, 34)],
    children: &[
        child(H, p(8, 20), p(0, 1)),
        child(H, p(14, 8), p(-1, 1)),
        child(P, p(10, 22), p(1, 0)),
        child(P, p(12, 12), p(0, 1)),
        child(F, p(-16, 38), p(1, -1)),
        child(F, p(-10, 32), p(-1, 0)),
        child(F, p(-4, 2), p(1, 0)),
        child(F, p(2, 2), p(0, -1)),
        child(F, p(8, 44), p(-1, 1)),
        child(F, p(14, 8), p(1, 0)),
        child(F, p(20, 2), p(-1, 1)),
    ],
    hats: &[hat(p(0, 6), p(-1, 1), false), hat(p(0, 12), p(0, 1), false)],
};
