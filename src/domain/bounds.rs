use serde::{Deserialize, Serialize};

use super::Coord;

/// Inclusive rectangle of cells.
///
/// Used both as a host-imposed limit on where cells may be placed and as a
/// region description (bounding boxes, visible area, random fill).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Rectangle spanned by two opposite corners, in any order
    pub fn from_corners(a: Coord, b: Coord) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Grow to include `coord`
    pub fn including(self, coord: Coord) -> Self {
        Self::new(
            self.min_x.min(coord.x),
            self.min_y.min(coord.y),
            self.max_x.max(coord.x),
            self.max_y.max(coord.y),
        )
    }

    pub const fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x && coord.y >= self.min_y && coord.y <= self.max_y
    }

    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }

    pub const fn area(&self) -> i64 {
        if self.is_valid() { self.width() * self.height() } else { 0 }
    }

    /// Every cell inside, row by row
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (self.min_y..=self.max_y)
            .flat_map(move |y| (self.min_x..=self.max_x).map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let b = Bounds::new(-1, -1, 1, 1);
        assert!(b.contains(Coord::new(-1, 1)));
        assert!(b.contains(Coord::new(1, -1)));
        assert!(!b.contains(Coord::new(2, 0)));
        assert!(!b.contains(Coord::new(0, -2)));
    }

    #[test]
    fn test_area_and_iter_agree() {
        let b = Bounds::new(-3, 2, 1, 4);
        assert_eq!(b.area(), 15);
        assert_eq!(b.iter().count(), 15);
        assert_eq!(b.iter().next(), Some(Coord::new(-3, 2)));
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        let b = Bounds::new(1, 0, 0, 0);
        assert!(!b.is_valid());
        assert_eq!(b.area(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn test_from_corners_orders_them() {
        let b = Bounds::from_corners(Coord::new(4, -1), Coord::new(-2, 3));
        assert_eq!(b, Bounds::new(-2, -1, 4, 3));
        assert_eq!(b.including(Coord::new(9, 9)), Bounds::new(-2, -1, 9, 9));
    }
}
