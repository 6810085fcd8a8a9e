//! Breadth-first expansion of one metatile generation into the next
//!
//! The expanded shapes fit together combinatorially exactly like the
//! unexpanded ones, but they are not a geometric similarity of them. So an
//! expanded tile's absolute position is only known once one of its vertices
//! has been placed by a neighbour. Expansion pins one vertex to the origin and
//! floods outwards across shared vertices, placing each tile from the first
//! of its vertices that is already known.

use crate::lattice::Point;
use crate::metatile::catalog::MAX_VERTEX_DEGREE;
use crate::metatile::set::{Lineage, Metatile, MetatileSet};
use bitvec::prelude::*;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Input vertex together with the tiles that own it and its output position
#[derive(Debug)]
struct VertexMapping {
    owners: Vec<usize>,
    output: Option<Point>,
}

/// Transient state of a single expansion pass
struct Expansion<'a> {
    input: &'a MetatileSet,
    vertices: HashMap<Point, VertexMapping>,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<'a> Expansion<'a> {
    fn new(input: &'a MetatileSet) -> Self {
        let mut vertices: HashMap<Point, VertexMapping> = HashMap::new();

        for (index, tile) in input.iter().enumerate() {
            for vertex in tile.vertices() {
                let mapping = vertices.entry(vertex).or_insert_with(|| VertexMapping {
                    owners: Vec::with_capacity(MAX_VERTEX_DEGREE),
                    output: None,
                });
                assert!(
                    mapping.owners.len() < MAX_VERTEX_DEGREE,
                    "vertex {vertex} is shared by more than {MAX_VERTEX_DEGREE} metatiles"
                );
                mapping.owners.push(index);
            }
        }

        Self {
            input,
            vertices,
            visited: bitvec![0; input.len()],
            queue: VecDeque::with_capacity(input.len()),
        }
    }

    /// Fix the output position of an input vertex and queue its unvisited owners
    fn map_vertex(&mut self, input: Point, output: Point) {
        let Some(mapping) = self.vertices.get_mut(&input) else {
            unreachable!("vertex {input} is not part of the tiling");
        };

        if let Some(existing) = mapping.output {
            debug_assert_eq!(
                existing, output,
                "vertex {input} reached at two different output positions"
            );
            return;
        }

        trace!(%input, %output, "mapped vertex");
        mapping.output = Some(output);

        for &owner in &mapping.owners {
            if self.visited.get(owner).as_deref() == Some(&false) {
                self.visited.set(owner, true);
                self.queue.push_back(owner);
            }
        }
    }

    /// Output positions of a tile's expanded polygon, aligned on a mapped vertex
    fn place(&self, tile: &Metatile) -> Vec<Point> {
        let expanded = tile.expanded_vertices();
        let offset = tile
            .vertices()
            .iter()
            .zip(&expanded)
            .find_map(|(vertex, &target)| {
                self.vertices
                    .get(vertex)
                    .and_then(|mapping| mapping.output)
                    .map(|output| output - target)
            });
        let Some(offset) = offset else {
            unreachable!(
                "metatile {} @ {} was queued without a mapped vertex",
                tile.kind, tile.start
            );
        };

        expanded.into_iter().map(|v| v + offset).collect()
    }

    fn run(mut self, seed: usize) -> MetatileSet {
        let input = self.input;
        let mut output = MetatileSet::new(input.generation() + 1);

        #[allow(clippy::panic)]
        let Some(seed_tile) = input.get(seed) else {
            panic!(
                "seed index {seed} is outside a set of {} metatiles",
                input.len()
            );
        };
        self.map_vertex(seed_tile.start, Point::ORIGIN);

        while let Some(index) = self.queue.pop_front() {
            let Some(tile) = input.get(index) else {
                continue;
            };
            trace!(kind = %tile.kind, start = %tile.start, "expanding metatile");

            let placed = self.place(tile);
            for (&from, &to) in tile.vertices().iter().zip(&placed) {
                self.map_vertex(from, to);
            }

            let anchor = placed.first().copied().unwrap_or(tile.start);
            for (child_index, child) in tile.children_at(anchor).into_iter().enumerate() {
                output.insert_child(
                    child,
                    Lineage {
                        generation: input.generation(),
                        parent: index,
                        child_index,
                    },
                );
            }
        }

        assert!(
            self.visited.all(),
            "expansion reached {} of {} metatiles",
            self.visited.count_ones(),
            input.len()
        );

        let boundary: Vec<Point> = input
            .boundary()
            .iter()
            .filter_map(|p| self.vertices.get(p).and_then(|mapping| mapping.output))
            .collect();
        assert_eq!(
            boundary.len(),
            input.boundary().len(),
            "boundary vertex lost during expansion"
        );
        output.set_boundary(boundary);

        debug!(
            generation = output.generation(),
            input_tiles = input.len(),
            output_tiles = output.len(),
            vertices = self.vertices.len(),
            "expanded metatile set"
        );
        output
    }
}

impl MetatileSet {
    /// Substitute every metatile, producing the next generation
    ///
    /// The first metatile's vertex #0 is pinned to the output origin.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty, or if the tiling invariants are broken: a
    /// vertex shared by more than three tiles, a tile unreachable from the
    /// seed, or a child with more than four parents.
    pub fn expand(&self) -> Self {
        self.expand_seeded(0)
    }

    /// Like [`MetatileSet::expand`], pinning vertex #0 of the tile at `seed`
    ///
    /// The choice of seed only translates the result.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is out of range, or under the same conditions as
    /// [`MetatileSet::expand`].
    pub fn expand_seeded(&self, seed: usize) -> Self {
        Expansion::new(self).run(seed)
    }
}
