use crate::domain::{Bounds, Coord};

pub const MIN_CELL_SIZE: f32 = 2.0;
pub const MAX_CELL_SIZE: f32 = 200.0;

/// Viewport maps between window pixels and grid cells.
/// Pure display geometry: changing it never touches the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
            offset_x: 0.0,
            offset_y: 0.0,
            width,
            height,
        }
    }

    /// Grid cell under a pixel; floors so cells left of / above the origin work
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Coord {
        let x = ((screen_x - self.offset_x) / self.cell_size).floor();
        let y = ((screen_y - self.offset_y) / self.cell_size).floor();
        Coord::new(x as i32, y as i32)
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, coord: Coord) -> (f32, f32) {
        (
            coord.x as f32 * self.cell_size + self.offset_x,
            coord.y as f32 * self.cell_size + self.offset_y,
        )
    }

    /// Cells at least partly inside the window
    pub fn visible_region(&self) -> Bounds {
        let top_left = self.screen_to_cell(0.0, 0.0);
        let bottom_right = self.screen_to_cell(self.width.max(1.0) - 1.0, self.height.max(1.0) - 1.0);
        Bounds::from_corners(top_left, bottom_right)
    }

    pub fn is_visible(&self, coord: Coord) -> bool {
        self.visible_region().contains(coord)
    }

    /// Returns `true` if the window size actually changed
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Returns `true` if the (clamped) cell size actually changed
    pub fn set_cell_size(&mut self, cell_size: f32) -> bool {
        let cell_size = cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        if cell_size == self.cell_size {
            return false;
        }
        self.cell_size = cell_size;
        true
    }

    pub fn zoom_in(&mut self, factor: f32) -> bool {
        self.set_cell_size(self.cell_size * factor)
    }

    pub fn zoom_out(&mut self, factor: f32) -> bool {
        self.set_cell_size(self.cell_size / factor)
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self, cell_size: f32) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.set_cell_size(cell_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell() {
        let v = Viewport::new(500.0, 400.0, 50.0);
        assert_eq!(v.screen_to_cell(0.0, 0.0), Coord::new(0, 0));
        assert_eq!(v.screen_to_cell(49.9, 50.0), Coord::new(0, 1));
        assert_eq!(v.screen_to_cell(125.0, 399.0), Coord::new(2, 7));
    }

    #[test]
    fn test_negative_cells_after_pan() {
        let mut v = Viewport::new(500.0, 400.0, 10.0);
        v.pan(100.0, 100.0);
        assert_eq!(v.screen_to_cell(95.0, 99.0), Coord::new(-1, -1));
        assert_eq!(v.screen_to_cell(0.0, 0.0), Coord::new(-10, -10));
        assert_eq!(v.cell_to_screen(Coord::new(-10, -10)), (0.0, 0.0));
    }

    #[test]
    fn test_cell_to_screen_inverts_mapping() {
        let mut v = Viewport::new(800.0, 600.0, 12.0);
        v.pan(-37.0, 15.0);
        for c in [Coord::new(0, 0), Coord::new(-4, 9), Coord::new(20, -3)] {
            let (sx, sy) = v.cell_to_screen(c);
            assert_eq!(v.screen_to_cell(sx + 1.0, sy + 1.0), c);
        }
    }

    #[test]
    fn test_visible_region() {
        let v = Viewport::new(500.0, 400.0, 50.0);
        assert_eq!(v.visible_region(), Bounds::new(0, 0, 9, 7));
        assert!(v.is_visible(Coord::new(9, 7)));
        assert!(!v.is_visible(Coord::new(10, 0)));
    }

    #[test]
    fn test_geometry_changes_are_reported() {
        let mut v = Viewport::new(500.0, 400.0, 50.0);
        assert!(!v.resize(500.0, 400.0));
        assert!(v.resize(640.0, 400.0));
        assert!(!v.set_cell_size(50.0));
        assert!(v.zoom_in(2.0));
        assert_eq!(v.cell_size, 100.0);
        assert!(v.set_cell_size(1000.0));
        assert_eq!(v.cell_size, MAX_CELL_SIZE);
        assert!(!v.zoom_in(2.0));
    }
}
