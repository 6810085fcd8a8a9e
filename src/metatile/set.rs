//! Placed metatiles and the per-generation deduplicating arena

use crate::lattice::{Frame, Point};
use crate::metatile::catalog::{MAX_LINEAGE, MetatileType};
use std::collections::HashMap;

/// Weak back-reference from a child to the parent that produced it
///
/// The parent is named by generation number and arena index, so the record
/// stays valid however long the caller keeps that generation around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lineage {
    /// Generation the parent belongs to
    pub generation: usize,
    /// Arena index of the parent within its generation
    pub parent: usize,
    /// Position of this child in the parent's substitution list
    pub child_index: usize,
}

/// Canonical identity of a metatile within one generation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetatileKey {
    /// Metatile type
    pub kind: MetatileType,
    /// Global position of vertex #0
    pub start: Point,
    /// Global orientation
    pub orientation: Point,
}

/// One placed metatile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metatile {
    /// Metatile type
    pub kind: MetatileType,
    /// Global position of vertex #0
    pub start: Point,
    /// Global orientation, always one of the six unit vectors
    pub orientation: Point,
    /// Parents that produced this tile, in discovery order
    pub lineage: Vec<Lineage>,
}

impl Metatile {
    /// Place a metatile with no lineage
    ///
    /// # Panics
    ///
    /// Panics if `orientation` is not a unit direction
    pub fn new(kind: MetatileType, start: Point, orientation: Point) -> Self {
        assert!(
            orientation.is_unit_direction(),
            "metatile orientation {orientation} is not a unit direction"
        );
        Self {
            kind,
            start,
            orientation,
            lineage: Vec::new(),
        }
    }

    /// Canonical key of this tile
    pub const fn key(&self) -> MetatileKey {
        MetatileKey {
            kind: self.kind,
            start: self.start,
            orientation: self.orientation,
        }
    }

    /// Frame mapping catalog coordinates onto this tile
    pub const fn frame(&self) -> Frame {
        Frame::new(self.start, self.orientation)
    }

    /// Global vertex polygon
    pub fn vertices(&self) -> Vec<Point> {
        let frame = self.frame();
        self.kind
            .vertices()
            .iter()
            .map(|&v| frame.apply(v))
            .collect()
    }

    /// Polygon this tile's substructure occupies once the patch has grown a generation
    ///
    /// Only relative positions are meaningful: the result is anchored at the
    /// tile's current start, and expansion translates it into place.
    pub fn expanded_vertices(&self) -> Vec<Point> {
        let frame = self.frame();
        self.kind
            .expanded_vertices()
            .iter()
            .map(|&v| frame.apply(v))
            .collect()
    }

    /// Children of this tile, as if its vertex #0 were at `anchor`
    pub fn children_at(&self, anchor: Point) -> Vec<Self> {
        let frame = Frame::new(anchor, self.orientation);
        self.kind
            .children()
            .iter()
            .map(|c| Self::new(c.kind, frame.apply(c.start), frame.rotate(c.orientation)))
            .collect()
    }

    /// Children of this tile anchored at its own start
    pub fn children(&self) -> Vec<Self> {
        self.children_at(self.start)
    }

    fn record_parent(&mut self, lineage: Lineage) {
        assert!(
            self.lineage.len() < MAX_LINEAGE,
            "metatile {} @ {} has more than {MAX_LINEAGE} parents",
            self.kind,
            self.start
        );
        self.lineage.push(lineage);
    }
}

/// Ordered, deduplicating collection of the metatiles of one generation
#[derive(Clone, Debug)]
pub struct MetatileSet {
    generation: usize,
    tiles: Vec<Metatile>,
    index: HashMap<MetatileKey, usize>,
    boundary: Vec<Point>,
}

impl MetatileSet {
    /// Empty set for the given generation
    pub fn new(generation: usize) -> Self {
        Self {
            generation,
            tiles: Vec::new(),
            index: HashMap::new(),
            boundary: Vec::new(),
        }
    }

    /// Generation 0: a single metatile at the origin facing `(1, 0)`
    ///
    /// A P seed also tracks its two obtuse vertices (#1 and #3). Those stay on
    /// tiling vertices through every later expansion, so mapping them forward
    /// yields a bounding rectangle for the grown patch.
    pub fn seed(kind: MetatileType) -> Self {
        let mut set = Self::new(0);
        let tile = Metatile::new(kind, Point::ORIGIN, Point::new(1, 0));
        if kind == MetatileType::P {
            let vertices = tile.vertices();
            set.boundary = [1, 3]
                .iter()
                .filter_map(|&i| vertices.get(i).copied())
                .collect();
        }
        set.insert(tile);
        set
    }

    /// Generation number of this set
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Number of metatiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set holds no metatiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Metatile at an arena index
    pub fn get(&self, index: usize) -> Option<&Metatile> {
        self.tiles.get(index)
    }

    /// Arena index of the metatile with the given key
    pub fn find(&self, key: &MetatileKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Whether a metatile with this key is present
    pub fn contains(&self, key: &MetatileKey) -> bool {
        self.index.contains_key(key)
    }

    /// Metatiles in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Metatile> {
        self.tiles.iter()
    }

    /// Metatiles as a slice
    pub fn tiles(&self) -> &[Metatile] {
        &self.tiles
    }

    /// Tracked boundary points (empty, or two points for a P seed)
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    pub(crate) fn set_boundary(&mut self, boundary: Vec<Point>) {
        self.boundary = boundary;
    }

    /// Insert a metatile unless one with the same key exists
    ///
    /// Returns the arena index and whether the tile was newly added. When the
    /// key already exists, the incoming lineage is merged into the stored tile.
    pub fn insert(&mut self, tile: Metatile) -> (usize, bool) {
        let key = tile.key();
        if let Some(&existing) = self.index.get(&key) {
            if let Some(stored) = self.tiles.get_mut(existing) {
                for lineage in tile.lineage {
                    stored.record_parent(lineage);
                }
            }
            return (existing, false);
        }

        let position = self.tiles.len();
        self.tiles.push(tile);
        self.index.insert(key, position);
        (position, true)
    }

    /// Insert a child produced by `lineage.parent`, merging with an existing copy
    pub fn insert_child(&mut self, mut tile: Metatile, lineage: Lineage) -> usize {
        tile.lineage.clear();
        let (position, _) = self.insert(tile);
        if let Some(stored) = self.tiles.get_mut(position) {
            stored.record_parent(lineage);
        }
        position
    }

    /// Count of metatiles per type, indexed by [`MetatileType::index`]
    pub fn type_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for tile in &self.tiles {
            if let Some(count) = counts.get_mut(tile.kind.index()) {
                *count += 1;
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a MetatileSet {
    type Item = &'a Metatile;
    type IntoIter = std::slice::Iter<'a, Metatile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
