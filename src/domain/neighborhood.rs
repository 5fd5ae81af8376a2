use super::{Coord, LiveCells};

/// Count live cells among the 8 Moore neighbors of `coord`.
///
/// Reads only `cells`, which must be the generation being stepped from and
/// never the one under construction. The cell itself is not counted.
pub fn live_neighbor_count(cells: &LiveCells, coord: Coord) -> u8 {
    coord
        .neighbors()
        .filter(|&n| cells.contains(n))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> LiveCells {
        coords.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_empty_neighborhood() {
        assert_eq!(live_neighbor_count(&LiveCells::new(), Coord::new(0, 0)), 0);
    }

    #[test]
    fn test_self_is_excluded() {
        let live = cells(&[(0, 0)]);
        assert_eq!(live_neighbor_count(&live, Coord::new(0, 0)), 0);
        assert_eq!(live_neighbor_count(&live, Coord::new(1, 1)), 1);
    }

    #[test]
    fn test_full_ring() {
        let ring = cells(&[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)]);
        assert_eq!(live_neighbor_count(&ring, Coord::new(0, 0)), 8);

        let mut packed = ring.clone();
        packed.insert(Coord::new(0, 0));
        assert_eq!(live_neighbor_count(&packed, Coord::new(0, 0)), 8);
    }

    #[test]
    fn test_distance_two_is_ignored() {
        let live = cells(&[(2, 0), (0, 2), (-2, -2)]);
        assert_eq!(live_neighbor_count(&live, Coord::new(0, 0)), 0);
    }

    #[test]
    fn test_negative_quadrant() {
        let live = cells(&[(-5, -5), (-4, -5), (-6, -4)]);
        assert_eq!(live_neighbor_count(&live, Coord::new(-5, -4)), 3);
    }
}
