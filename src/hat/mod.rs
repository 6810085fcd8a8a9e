//! Hats: the concrete tiles drawn on the board

/// Hat templates per metatile, hat outlines and clipping
pub mod extraction;
/// Kite centres and kite-to-kite steps
pub mod kites;

pub use extraction::{HAT_VERTEX_COUNT, Hat};
pub use kites::{HAT_KITE_COUNT, KiteStep, step_kite};
