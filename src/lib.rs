//! Patch generation for the "hat" aperiodic monotile
//!
//! A small catalog of metatiles (H, T, P, F) is expanded generation by
//! generation through a substitution system, then each metatile is converted
//! into one, two or four hats. All geometry is exact integer arithmetic on the
//! triangular lattice.

#![forbid(unsafe_code)]

/// Hat extraction, clipping and kite geometry
pub mod hat;
/// Input/output operations and error handling
pub mod io;
/// Lattice points, rotations, frames and clip windows
pub mod lattice;
/// Metatile catalog, sets and the expansion algorithm
pub mod metatile;
/// Random board selection and planar emission
pub mod patch;

pub use hat::Hat;
pub use io::error::{Result, TilingError};
pub use lattice::{ClipRect, Point};
pub use metatile::{GenerationChain, Metatile, MetatileSet, MetatileType};
