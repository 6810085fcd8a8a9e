//! Successive generations kept alive for lineage queries

use crate::metatile::catalog::MetatileType;
use crate::metatile::set::MetatileSet;

/// Every generation grown from one seed, oldest first
///
/// Lineage records name parents by generation and index, so they can only be
/// followed while the parent generation is still held here.
#[derive(Clone, Debug)]
pub struct GenerationChain {
    history: Vec<MetatileSet>,
    latest: MetatileSet,
}

impl GenerationChain {
    /// Chain holding only the seed generation
    pub fn new(seed: MetatileType) -> Self {
        Self {
            history: Vec::new(),
            latest: MetatileSet::seed(seed),
        }
    }

    /// Expand the newest generation `count` more times
    pub fn grow(&mut self, count: usize) {
        self.grow_with(count, |_| {});
    }

    /// Expand `count` more times, reporting each new generation
    pub fn grow_with<F>(&mut self, count: usize, mut on_generation: F)
    where
        F: FnMut(&MetatileSet),
    {
        for _ in 0..count {
            let next = self.latest.expand();
            on_generation(&next);
            let previous = std::mem::replace(&mut self.latest, next);
            self.history.push(previous);
        }
    }

    /// Newest generation
    pub const fn latest(&self) -> &MetatileSet {
        &self.latest
    }

    /// Generation by number
    pub fn generation(&self, generation: usize) -> Option<&MetatileSet> {
        if generation == self.history.len() {
            Some(&self.latest)
        } else {
            self.history.get(generation)
        }
    }

    /// Number of generations held, including the seed
    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    /// Always false; a chain starts with its seed generation
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Take ownership of the newest generation, dropping the rest
    pub fn into_latest(self) -> MetatileSet {
        self.latest
    }

    /// Child indices from a tile up to the seed
    ///
    /// Each step follows the first recorded parent. The seed generation has
    /// no parents, so a path from generation `g` has `g` entries.
    pub fn lineage_path(&self, generation: usize, index: usize) -> Option<Vec<usize>> {
        let mut tile = self.generation(generation)?.get(index)?;
        let mut path = Vec::with_capacity(generation);

        while let Some(lineage) = tile.lineage.first() {
            path.push(lineage.child_index);
            tile = self
                .generation(lineage.generation)?
                .get(lineage.parent)?;
        }

        Some(path)
    }

    /// Dotted label of [`GenerationChain::lineage_path`], e.g. `"3.0.7"`
    pub fn lineage_label(&self, generation: usize, index: usize) -> Option<String> {
        let path = self.lineage_path(generation, index)?;
        Some(
            path.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

/// Grow `count` generations from a seed without keeping any history
///
/// Each input set is dropped as soon as it has been expanded, so lineage
/// records in the result point at generations that no longer exist.
pub fn grow(seed: MetatileType, count: usize) -> MetatileSet {
    (0..count).fold(MetatileSet::seed(seed), |set, _| set.expand())
}
