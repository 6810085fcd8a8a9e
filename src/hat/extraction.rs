//! Conversion of finished metatiles into hat polygons

use crate::lattice::{ClipRect, Frame, Point};
use crate::metatile::catalog::{MAX_HATS, MetatileType};
use crate::metatile::set::{Metatile, MetatileSet};

/// Vertices of one hat, counting the straight-angle vertex
pub const HAT_VERTEX_COUNT: usize = 14;

/// Outline of the hat at the origin facing `(1, 0)`
pub const REFERENCE_HAT: [Point; HAT_VERTEX_COUNT] = [
    Point::new(0, 0),
    Point::new(3, 0),
    Point::new(2, 2),
    Point::new(0, 3),
    Point::new(-2, 4),
    Point::new(-3, 3),
    Point::new(-6, 6),
    Point::new(-9, 6),
    Point::new(-8, 4),
    Point::new(-6, 3),
    Point::new(-6, 0),
    Point::new(-3, -3),
    Point::new(-2, -2),
    Point::new(0, -3),
];

/// A single placed hat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hat {
    /// Global position of vertex #0
    pub start: Point,
    /// Global orientation
    pub orientation: Point,
    /// Whether this is the reflected hat of an H metatile
    pub reversed: bool,
    /// Arena index of the metatile this hat came from
    pub parent: usize,
    /// Type of that metatile
    pub parent_kind: MetatileType,
    /// Position of this hat within its metatile
    pub index: usize,
}

impl Hat {
    /// Frame carrying reference-hat coordinates onto this hat
    ///
    /// The reflected hat turns its transverse axis the other way.
    pub const fn frame(&self) -> Frame {
        if self.reversed {
            Frame::mirrored(self.start, self.orientation)
        } else {
            Frame::new(self.start, self.orientation)
        }
    }

    /// The hat's outline
    ///
    /// A reflected hat walks the reference outline backwards so every hat is
    /// wound the same way.
    pub fn vertices(&self) -> [Point; HAT_VERTEX_COUNT] {
        let frame = self.frame();
        let mut out = [Point::ORIGIN; HAT_VERTEX_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            let source = if self.reversed {
                HAT_VERTEX_COUNT - 1 - i
            } else {
                i
            };
            if let Some(&v) = REFERENCE_HAT.get(source) {
                *slot = frame.apply(v);
            }
        }
        out
    }

    /// Outline as `[2x + y, y]` pairs
    pub fn planar_vertices(&self) -> [[i32; 2]; HAT_VERTEX_COUNT] {
        self.vertices().map(Point::planar)
    }

    /// Whether the whole hat fits inside a clip window
    pub fn within(&self, clip: &ClipRect) -> bool {
        clip.contains_all(&self.vertices())
    }

    /// Whether some placement of a hat fits a `width × height` planar window
    ///
    /// Every orientation is tried, reflected or not. A window failing this
    /// can never contain a whole hat.
    pub fn fits_window(width: i32, height: i32) -> bool {
        Point::UNIT_DIRECTIONS
            .into_iter()
            .flat_map(|orientation| {
                [false, true].map(|reversed| Self {
                    start: Point::ORIGIN,
                    orientation,
                    reversed,
                    parent: 0,
                    parent_kind: MetatileType::H,
                    index: 0,
                })
            })
            .filter_map(|hat| ClipRect::enclosing(&hat.vertices()))
            .any(|extent| extent.width() <= width && extent.height() <= height)
    }
}

impl Metatile {
    /// Hats inside this metatile, tagged with the metatile's arena index
    pub fn hats(&self, parent: usize) -> Vec<Hat> {
        let templates = self.kind.hat_templates();
        debug_assert!(templates.len() <= MAX_HATS);

        let frame = self.frame();
        templates
            .iter()
            .enumerate()
            .map(|(index, template)| Hat {
                start: frame.apply(template.start),
                orientation: frame.rotate(template.orientation),
                reversed: template.reversed,
                parent,
                parent_kind: self.kind,
                index,
            })
            .collect()
    }
}

impl MetatileSet {
    /// Every hat in the set, optionally keeping only those inside `clip`
    pub fn hats(&self, clip: Option<&ClipRect>) -> Vec<Hat> {
        self.iter()
            .enumerate()
            .flat_map(|(parent, tile)| tile.hats(parent))
            .filter(|hat| clip.is_none_or(|rect| hat.within(rect)))
            .collect()
    }

    /// Number of hats the set would yield without clipping
    pub fn hat_count(&self) -> usize {
        self.iter()
            .map(|tile| tile.kind.hat_templates().len())
            .sum()
    }
}
