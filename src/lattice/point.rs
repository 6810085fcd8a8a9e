//! Lattice points in the basis (1, r)
//!
//! r satisfies r² = r − 1, so multiplying by r (a sixth turn anticlockwise)
//! maps x + yr to −y + (x + y)r. Every operation here is exact integer
//! arithmetic; six rotations in either direction return the original point.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A lattice point `x + y·r`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Coefficient of 1
    pub x: i32,
    /// Coefficient of r
    pub y: i32,
}

impl Point {
    /// The lattice origin
    pub const ORIGIN: Self = Self::new(0, 0);

    /// The six unit vectors, starting at `(1, 0)` and turning anticlockwise
    pub const UNIT_DIRECTIONS: [Self; 6] = [
        Self::new(1, 0),
        Self::new(0, 1),
        Self::new(-1, 1),
        Self::new(-1, 0),
        Self::new(0, -1),
        Self::new(1, -1),
    ];

    /// Create a point from its two basis coefficients
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate a sixth of a turn anticlockwise
    pub const fn left6(self) -> Self {
        Self::new(-self.y, self.x + self.y)
    }

    /// Rotate a sixth of a turn clockwise
    ///
    /// 1/r = 1 − r, so dividing by r maps x + yr to (x + y) − xr.
    pub const fn right6(self) -> Self {
        Self::new(self.x + self.y, -self.x)
    }

    /// Whether this point is one of the six unit vectors
    pub fn is_unit_direction(self) -> bool {
        Self::UNIT_DIRECTIONS.contains(&self)
    }

    /// Horizontal planar coordinate, up to a constant scale
    ///
    /// The basis vector r is not perpendicular to 1, so the axis-aligned
    /// extent of a point is measured by `2x + y` rather than `x`.
    pub const fn planar_x(self) -> i32 {
        2 * self.x + self.y
    }

    /// Vertical planar coordinate, up to a constant scale
    pub const fn planar_y(self) -> i32 {
        self.y
    }

    /// Both planar functionals as a `[2x + y, y]` pair
    pub const fn planar(self) -> [i32; 2] {
        [self.planar_x(), self.planar_y()]
    }

    /// Cartesian position, with every unit direction of length 1
    pub fn to_cartesian(self) -> (f64, f64) {
        let x = f64::from(self.x) + f64::from(self.y) / 2.0;
        let y = f64::from(self.y) * 0.75_f64.sqrt();
        (x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
