//! Metatile substitution system
//!
//! Four metatile shapes (H, T, P, F) each expand into a fixed arrangement of
//! smaller metatiles. Repeating the expansion grows an arbitrarily large patch,
//! which is finally converted into hats.

/// Static per-type shape, substitution and hat tables
pub mod catalog;
/// Generation chains and lineage paths
pub mod chain;
/// Breadth-first expansion into the next generation
pub mod expansion;
/// Placed metatiles and the deduplicating set
pub mod set;

pub use catalog::MetatileType;
pub use chain::{GenerationChain, grow};
pub use set::{Lineage, Metatile, MetatileKey, MetatileSet};
