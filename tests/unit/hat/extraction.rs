//! Tests for hat extraction and clipping

#[cfg(test)]
mod tests {
    use monotile::hat::Hat;
    use monotile::hat::extraction::REFERENCE_HAT;
    use monotile::lattice::{ClipRect, Point};
    use monotile::metatile::{MetatileSet, MetatileType, grow};

    fn hat_at(start: Point, orientation: Point, reversed: bool) -> Hat {
        Hat {
            start,
            orientation,
            reversed,
            parent: 0,
            parent_kind: MetatileType::H,
            index: 0,
        }
    }

    #[test]
    fn test_p_seed_yields_two_hats() {
        let set = MetatileSet::seed(MetatileType::P);
        let hats = set.hats(None);
        assert_eq!(hats.len(), 2);
        assert!(hats.iter().all(|hat| hat.parent_kind == MetatileType::P && !hat.reversed));
    }

    // 2 H, 3 P and 6 F children carry 2*4 + 3*2 + 6*2 hats
    #[test]
    fn test_first_generation_hat_count() {
        let set = MetatileSet::seed(MetatileType::P).expand();
        assert_eq!(set.type_counts(), [2, 0, 3, 6]);
        assert_eq!(set.hats(None).len(), 26);
        assert_eq!(set.hat_count(), 26);
    }

    #[test]
    fn test_h_seed_has_one_reversed_hat() {
        let hats = MetatileSet::seed(MetatileType::H).hats(None);
        assert_eq!(hats.len(), 4);
        let reversed: Vec<_> = hats.iter().filter(|hat| hat.reversed).collect();
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed.first().map(|hat| hat.index), Some(3));
        assert_eq!(reversed.first().map(|hat| hat.start), Some(Point::new(0, 6)));
        assert_eq!(reversed.first().map(|hat| hat.orientation), Some(Point::new(-1, 0)));
    }

    #[test]
    fn test_reference_hat_outline() {
        let hat = hat_at(Point::ORIGIN, Point::new(1, 0), false);
        assert_eq!(hat.vertices(), REFERENCE_HAT);
        assert_eq!(hat.planar_vertices()[1], [6, 0]);
    }

    // The reflected hat walks its mirrored outline backwards
    #[test]
    fn test_reversed_outline() {
        let hat = hat_at(Point::ORIGIN, Point::new(1, 0), true);
        let vertices = hat.vertices();
        assert_eq!(vertices[0], Point::new(-3, 3));
        assert_eq!(vertices[13], Point::ORIGIN);
        assert_eq!(vertices[12], Point::new(3, 0));
    }

    #[test]
    fn test_hats_are_translated_with_metatile() {
        let set = grow(MetatileType::T, 1);
        for hat in set.hats(None) {
            let tile = set.get(hat.parent).expect("hat parent exists");
            assert_eq!(hat.parent_kind, tile.kind);
            assert!(hat.index < tile.kind.hat_templates().len());
            assert!(hat.orientation.is_unit_direction());
        }
    }

    #[test]
    fn test_clip_keeps_only_contained_hats() {
        let set = grow(MetatileType::P, 2);
        let all = set.hats(None);
        assert_eq!(all.len(), set.hat_count());

        let every_vertex: Vec<Point> = all.iter().flat_map(Hat::vertices).collect();
        let bounds = ClipRect::enclosing(&every_vertex).expect("patch has vertices");
        assert_eq!(set.hats(Some(&bounds)).len(), all.len());

        let half = ClipRect::new(
            bounds.x_min,
            bounds.x_min + bounds.width() / 2,
            bounds.y_min,
            bounds.y_max,
        );
        let clipped = set.hats(Some(&half));
        assert!(clipped.len() < all.len());
        assert!(clipped.iter().all(|hat| hat.within(&half)));

        let far_away = ClipRect::new(10_000, 10_100, 10_000, 10_100);
        assert!(set.hats(Some(&far_away)).is_empty());
    }

    #[test]
    fn test_fits_window_matches_smallest_hat_boxes() {
        assert!(Hat::fits_window(18, 9));
        assert!(Hat::fits_window(15, 12));
        assert!(Hat::fits_window(100, 100));
        assert!(!Hat::fits_window(17, 9));
        assert!(!Hat::fits_window(18, 8));
        assert!(!Hat::fits_window(15, 11));
        assert!(!Hat::fits_window(12, 12));
    }

    // A hat straddling the edge is dropped, not cut
    #[test]
    fn test_within_requires_every_vertex() {
        let hat = hat_at(Point::ORIGIN, Point::new(1, 0), false);
        let planar: Vec<[i32; 2]> = hat.planar_vertices().to_vec();
        let x_min = planar.iter().map(|v| v[0]).min().unwrap_or_default();
        let x_max = planar.iter().map(|v| v[0]).max().unwrap_or_default();
        let y_min = planar.iter().map(|v| v[1]).min().unwrap_or_default();
        let y_max = planar.iter().map(|v| v[1]).max().unwrap_or_default();

        assert!(hat.within(&ClipRect::new(x_min, x_max, y_min, y_max)));
        assert!(!hat.within(&ClipRect::new(x_min + 1, x_max, y_min, y_max)));
        assert!(!hat.within(&ClipRect::new(x_min, x_max, y_min, y_max - 1)));
    }
}
