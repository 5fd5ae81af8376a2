//! What the screen needs repainting since the last frame.

use crate::domain::{Coord, Delta, LiveCells};

use super::Viewport;

/// Renderer boundary: anything that can paint single cells or the whole view.
pub trait Painter {
    /// Paint one cell as alive or dead
    fn paint_cell(&mut self, coord: Coord, alive: bool, viewport: &Viewport);

    /// Wipe and redraw everything visible from `cells`
    fn repaint(&mut self, cells: &LiveCells, viewport: &Viewport);
}

/// Accumulated repaint work.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Damage {
    #[default]
    Clean,
    /// Individual cell changes, in the order they happened
    Cells(Vec<(Coord, bool)>),
    /// Geometry changed; only a full repaint is correct
    Full,
}

impl Damage {
    pub fn is_clean(&self) -> bool {
        matches!(self, Damage::Clean)
    }

    /// Fold a state delta into the pending work
    pub fn record(&mut self, delta: &Delta) {
        if delta.is_empty() {
            return;
        }
        match self {
            Damage::Full => {}
            Damage::Cells(changes) => changes.extend(delta.changes()),
            Damage::Clean => *self = Damage::Cells(delta.changes().collect()),
        }
    }

    /// Escalate to a full repaint, superseding any cell changes
    pub fn invalidate(&mut self) {
        *self = Damage::Full;
    }

    /// Hand the pending work to `painter` and reset to clean.
    /// Returns `true` if anything was painted.
    pub fn flush(&mut self, painter: &mut dyn Painter, cells: &LiveCells, viewport: &Viewport) -> bool {
        match std::mem::take(self) {
            Damage::Clean => false,
            Damage::Full => {
                painter.repaint(cells, viewport);
                true
            }
            Damage::Cells(changes) => {
                changes
                    .into_iter()
                    .filter(|&(coord, _)| viewport.is_visible(coord))
                    .for_each(|(coord, alive)| painter.paint_cell(coord, alive, viewport));
                true
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Painter that remembers what it was asked to do
    #[derive(Default)]
    pub struct RecordingPainter {
        pub cells: Vec<(Coord, bool)>,
        pub repaints: usize,
    }

    impl Painter for RecordingPainter {
        fn paint_cell(&mut self, coord: Coord, alive: bool, _viewport: &Viewport) {
            self.cells.push((coord, alive));
        }

        fn repaint(&mut self, _cells: &LiveCells, _viewport: &Viewport) {
            self.repaints += 1;
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(100.0, 100.0, 10.0)
    }

    #[test]
    fn test_clean_paints_nothing() {
        let mut damage = Damage::default();
        let mut painter = RecordingPainter::default();
        assert!(!damage.flush(&mut painter, &LiveCells::new(), &viewport()));
        assert!(painter.cells.is_empty());
        assert_eq!(painter.repaints, 0);
    }

    #[test]
    fn test_cells_are_painted_in_order() {
        let mut damage = Damage::default();
        let c = Coord::new(1, 1);
        damage.record(&Delta::single(c, true));
        damage.record(&Delta::single(c, false));
        damage.record(&Delta::default());

        let mut painter = RecordingPainter::default();
        assert!(damage.flush(&mut painter, &LiveCells::new(), &viewport()));
        assert_eq!(painter.cells, vec![(c, true), (c, false)]);
        assert!(damage.is_clean());
    }

    #[test]
    fn test_offscreen_cells_are_skipped() {
        let mut damage = Damage::default();
        damage.record(&Delta::single(Coord::new(-1, 0), true));
        damage.record(&Delta::single(Coord::new(9, 9), true));
        let mut painter = RecordingPainter::default();
        damage.flush(&mut painter, &LiveCells::new(), &viewport());
        assert_eq!(painter.cells, vec![(Coord::new(9, 9), true)]);
    }

    #[test]
    fn test_full_supersedes_cells() {
        let mut damage = Damage::default();
        damage.record(&Delta::single(Coord::new(0, 0), true));
        damage.invalidate();
        damage.record(&Delta::single(Coord::new(1, 0), true));
        assert_eq!(damage, Damage::Full);

        let mut painter = RecordingPainter::default();
        damage.flush(&mut painter, &LiveCells::new(), &viewport());
        assert_eq!(painter.repaints, 1);
        assert!(painter.cells.is_empty());
    }
}
