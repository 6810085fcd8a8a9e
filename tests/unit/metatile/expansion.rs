//! Tests for breadth-first metatile expansion

#[cfg(test)]
mod tests {
    use monotile::lattice::{ClipRect, Point};
    use monotile::metatile::{Metatile, MetatileSet, MetatileType, grow};
    use std::collections::HashSet;

    #[test]
    fn test_single_expansion_yields_catalog_children() {
        for kind in MetatileType::ALL {
            let seed = MetatileSet::seed(kind);
            let next = seed.expand();
            assert_eq!(next.generation(), 1);
            assert_eq!(next.len(), kind.children().len(), "{kind}");
            assert_eq!(next.type_counts(), kind.child_histogram(), "{kind}");
        }
    }

    // The seed's vertex #0 is pinned to the origin, so generation 1 is the
    // seed's own substitution list
    #[test]
    fn test_seed_expansion_is_anchored_at_origin() {
        let seed = MetatileSet::seed(MetatileType::P);
        let next = seed.expand();
        let Some(tile) = seed.get(0) else {
            unreachable!("seed set holds one tile");
        };
        for child in tile.children() {
            assert!(next.contains(&child.key()), "missing {} @ {}", child.kind, child.start);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let set = grow(MetatileType::H, 3);
        let keys: HashSet<_> = set.iter().map(|tile| tile.key()).collect();
        assert_eq!(keys.len(), set.len());
    }

    // Shared children are stored once, so closure holds for lineage records
    // rather than for stored tiles
    #[test]
    fn test_lineage_records_match_histograms() {
        let input = grow(MetatileType::P, 2);
        let output = input.expand();

        let mut expected = [0; 4];
        for tile in &input {
            for (total, count) in expected.iter_mut().zip(tile.kind.child_histogram()) {
                *total += count;
            }
        }

        let mut recorded = [0; 4];
        for tile in &output {
            recorded[tile.kind.index()] += tile.lineage.len();
        }
        assert_eq!(recorded, expected);
    }

    #[test]
    fn test_every_input_tile_has_children() {
        let input = grow(MetatileType::F, 2);
        let output = input.expand();

        let mut parents = vec![0usize; input.len()];
        for tile in &output {
            assert!(!tile.lineage.is_empty());
            for record in &tile.lineage {
                assert_eq!(record.generation, input.generation());
                parents[record.parent] += 1;
            }
        }
        for (index, &count) in parents.iter().enumerate() {
            let kind = input.get(index).map(|tile| tile.kind);
            assert_eq!(
                Some(count),
                kind.map(|kind| kind.children().len()),
                "input tile {index} produced the wrong number of children"
            );
        }
    }

    #[test]
    fn test_seam_children_are_shared() {
        let set = grow(MetatileType::P, 3);
        assert!(
            set.iter().any(|tile| tile.lineage.len() > 1),
            "no child was produced by more than one parent"
        );
        assert!(set.iter().all(|tile| tile.lineage.len() <= 4));
    }

    // Pinning a different seed only translates the output
    #[test]
    fn test_seed_choice_is_a_translation() {
        let input = grow(MetatileType::P, 2);
        let last = input.len() - 1;
        let a = input.expand();
        let b = input.expand_seeded(last);
        assert_eq!(a.len(), b.len());

        let first_child = |set: &MetatileSet| {
            set.iter()
                .find(|tile| tile.lineage.iter().any(|l| l.parent == 0 && l.child_index == 0))
                .map(|tile| tile.start)
        };
        let (Some(start_a), Some(start_b)) = (first_child(&a), first_child(&b)) else {
            unreachable!("child 0 of tile 0 exists in both expansions");
        };
        let shift = start_b - start_a;

        for tile in &a {
            let mut key = tile.key();
            key.start += shift;
            assert!(b.contains(&key), "{} @ {} has no translated copy", tile.kind, tile.start);
        }
    }

    #[test]
    fn test_boundary_grows_monotonically() {
        let mut set = MetatileSet::seed(MetatileType::P);
        let mut previous: Option<ClipRect> = None;
        for _ in 0..=4 {
            assert_eq!(set.boundary().len(), 2);
            let Some(rect) = ClipRect::enclosing(set.boundary()) else {
                unreachable!("boundary is non-empty");
            };
            if let Some(previous) = previous {
                assert!(rect.width() > previous.width());
                assert!(rect.height() > previous.height());
            }
            previous = Some(rect);
            set = set.expand();
        }
    }

    #[test]
    fn test_boundary_after_first_expansion() {
        let next = MetatileSet::seed(MetatileType::P).expand();
        assert_eq!(next.boundary(), &[Point::new(14, 8), Point::new(-18, 36)]);
    }

    // Tiles that share no vertex with the seed can never be placed
    #[test]
    #[should_panic(expected = "expansion reached 1 of 2")]
    fn test_disconnected_tiles_panic() {
        let mut set = MetatileSet::new(0);
        set.insert(Metatile::new(MetatileType::T, Point::ORIGIN, Point::new(1, 0)));
        set.insert(Metatile::new(MetatileType::T, Point::new(600, 0), Point::new(1, 0)));
        let _ = set.expand();
    }

    #[test]
    #[should_panic(expected = "shared by more than 3")]
    fn test_crowded_vertex_panics() {
        let mut set = MetatileSet::new(0);
        for orientation in Point::UNIT_DIRECTIONS.into_iter().take(4) {
            set.insert(Metatile::new(MetatileType::T, Point::ORIGIN, orientation));
        }
        let _ = set.expand();
    }

    #[test]
    #[should_panic(expected = "outside a set of 0 metatiles")]
    fn test_empty_set_panics() {
        let _ = MetatileSet::new(0).expand();
    }

    #[test]
    #[should_panic(expected = "seed index 5")]
    fn test_out_of_range_seed_panics() {
        let _ = MetatileSet::seed(MetatileType::T).expand_seeded(5);
    }
}
