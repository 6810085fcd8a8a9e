//! Picking a rectangular board out of a grown patch

/// Random window selection and planar hat emission
pub mod selection;

pub use selection::{PatchParams, PlanarHat, generate_patch};
