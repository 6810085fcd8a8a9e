//! Exact integer geometry on the triangular lattice
//!
//! Points are expressed in the basis (1, r) where r is a primitive 6th root of
//! unity, scaled so that the side of each lattice triangle is 6 units long.

/// Rectangular clip windows expressed in the planar functionals
pub mod bounds;
/// Local coordinate frames built from a unit direction
pub mod frame;
/// Lattice points and sixth-turn rotations
pub mod point;

pub use bounds::ClipRect;
pub use frame::Frame;
pub use point::Point;
