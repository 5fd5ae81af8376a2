//! Sparse storage of the alive cells of one generation.
//! Only live cells are stored, so dead space costs nothing.

use std::collections::HashSet;

use rand::Rng;

use super::{Bounds, CellKey, Coord};

/// The set of alive cells; the single source of truth for simulation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveCells {
    keys: HashSet<CellKey>,
}

impl LiveCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// Fill `region` with random cells, each alive with probability `density`
    pub fn random(region: Bounds, density: f64, rng: &mut impl Rng) -> Self {
        let density = density.clamp(0.0, 1.0);
        region
            .iter()
            .filter(|_| rng.random_bool(density))
            .collect()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.keys.contains(&CellKey::encode(coord))
    }

    /// Returns `true` if the cell was dead before
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.keys.insert(CellKey::encode(coord))
    }

    /// Returns `true` if the cell was alive before; removing a dead cell is a no-op
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.keys.remove(&CellKey::encode(coord))
    }

    /// Flip one cell and return whether it is alive afterwards
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.remove(coord) {
            false
        } else {
            self.insert(coord)
        }
    }

    /// Read-only view of the current generation
    pub fn snapshot(&self) -> &HashSet<CellKey> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.keys.iter().map(|key| key.decode())
    }

    /// All live cells in row-major order
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }

    /// Smallest rectangle holding every live cell, `None` when empty
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold(Bounds::from_corners(first, first), |b, c| b.including(c)))
    }
}

impl FromIterator<Coord> for LiveCells {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(CellKey::encode).collect(),
        }
    }
}

impl FromIterator<CellKey> for LiveCells {
    fn from_iter<I: IntoIterator<Item = CellKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl From<HashSet<CellKey>> for LiveCells {
    fn from(keys: HashSet<CellKey>) -> Self {
        Self { keys }
    }
}

impl Extend<Coord> for LiveCells {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(CellKey::encode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_insert_is_idempotent() {
        let mut cells = LiveCells::new();
        assert!(cells.insert(Coord::new(-4, 9)));
        assert!(!cells.insert(Coord::new(-4, 9)));
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(Coord::new(-4, 9)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cells = LiveCells::new();
        assert!(!cells.remove(Coord::new(1, 1)));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut cells: LiveCells = [Coord::new(0, 0)].into_iter().collect();
        for c in [Coord::new(0, 0), Coord::new(7, -7)] {
            let before = cells.contains(c);
            assert_eq!(cells.toggle(c), !before);
            assert_eq!(cells.toggle(c), before);
            assert_eq!(cells.contains(c), before);
        }
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(LiveCells::new().bounding_box(), None);
        let cells: LiveCells = [Coord::new(-2, 5), Coord::new(3, -1), Coord::new(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(
            cells.bounding_box(),
            Some(Bounds::new(-2, -1, 3, 5))
        );
    }

    #[test]
    fn test_sorted_is_row_major() {
        let cells: LiveCells = [Coord::new(1, 1), Coord::new(0, 1), Coord::new(5, 0)]
            .into_iter()
            .collect();
        assert_eq!(
            cells.sorted(),
            vec![Coord::new(5, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_random_stays_in_region() {
        let region = Bounds::new(-5, -5, 4, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let cells = LiveCells::random(region, 0.3, &mut rng);
        assert!(!cells.is_empty());
        assert!(cells.len() < region.area() as usize);
        assert!(cells.iter().all(|c| region.contains(c)));

        assert!(LiveCells::random(region, 0.0, &mut rng).is_empty());
        assert_eq!(LiveCells::random(region, 1.0, &mut rng).len(), 100);
    }
}
