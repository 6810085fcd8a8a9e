//! Random window selection over a P-seeded patch
//!
//! A P seed carries its two obtuse vertices forward through every expansion,
//! and the rectangle they span stays covered by tiles. Selection grows the
//! seed until that rectangle can hold the requested window, then places the
//! window uniformly at random inside it.

use crate::hat::{HAT_VERTEX_COUNT, Hat};
use crate::io::configuration::MAX_GENERATIONS;
use crate::io::error::{Result, invalid_parameter};
use crate::lattice::ClipRect;
use crate::metatile::{MetatileSet, MetatileType, grow};
use rand::Rng;
use tracing::debug;

/// A board window and the generation count needed to cover it
///
/// All lengths are in the planar functionals `(2x + y, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchParams {
    /// Extent along `2x + y`
    pub width: i32,
    /// Extent along `y`
    pub height: i32,
    /// Expansions applied to the P seed
    pub generations: usize,
    /// Window origin along `2x + y`
    pub x: i32,
    /// Window origin along `y`
    pub y: i32,
}

/// A hat reduced to its planar outline, ready for a board builder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanarHat {
    /// Outline as `[2x + y, y]` pairs
    pub vertices: [[i32; 2]; HAT_VERTEX_COUNT],
    /// Type of the metatile the hat came from
    pub parent_kind: MetatileType,
    /// Position of the hat within its metatile
    pub index: usize,
    /// Whether this is a reflected hat
    pub reversed: bool,
}

impl PatchParams {
    /// Choose a generation count and a random window of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive, if no hat fits a
    /// window of this size (see [`Hat::fits_window`]), or if the window would
    /// need more than [`MAX_GENERATIONS`] expansions.
    ///
    /// A window only slightly larger than one hat can still land where no hat
    /// lies wholly inside it.
    pub fn randomise<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Result<Self> {
        if width <= 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height <= 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        if !Hat::fits_window(width, height) {
            return Err(invalid_parameter(
                "patch size",
                &format!("{width}x{height}"),
                &"too small to hold a single hat",
            ));
        }

        let mut set = MetatileSet::seed(MetatileType::P);
        let mut generations = 0;
        let bounds = loop {
            let Some(bounds) = ClipRect::enclosing(set.boundary()) else {
                return Err(invalid_parameter(
                    "seed",
                    &MetatileType::P,
                    &"seed carries no boundary",
                ));
            };
            if bounds.width() >= width && bounds.height() >= height {
                break bounds;
            }
            if generations >= MAX_GENERATIONS {
                return Err(invalid_parameter(
                    "patch size",
                    &format!("{width}x{height}"),
                    &format!("needs more than {MAX_GENERATIONS} generations"),
                ));
            }
            set = set.expand();
            generations += 1;
        };

        let x = rng.random_range(bounds.x_min..=bounds.x_max - width);
        let y = rng.random_range(bounds.y_min..=bounds.y_max - height);
        debug!(generations, x, y, width, height, "selected patch window");

        Ok(Self {
            width,
            height,
            generations,
            x,
            y,
        })
    }

    /// The window as a clip rectangle
    pub const fn clip(&self) -> ClipRect {
        ClipRect::new(self.x, self.x + self.width, self.y, self.y + self.height)
    }
}

/// Regrow the patch described by `params` and emit the hats inside its window
pub fn generate_patch(params: &PatchParams) -> Vec<PlanarHat> {
    let set = grow(MetatileType::P, params.generations);
    let clip = params.clip();

    set.hats(Some(&clip))
        .into_iter()
        .map(|hat| PlanarHat {
            vertices: hat.planar_vertices(),
            parent_kind: hat.parent_kind,
            index: hat.index,
            reversed: hat.reversed,
        })
        .collect()
}
