use rand::Rng;

use super::{Algorithm, Bounds, Coord, Delta, LiveCells, Pattern};
use crate::error::{Error, Result};

/// Owns the live-cell set and is the only thing allowed to change it.
///
/// Every mutation returns the [`Delta`] it caused so a renderer can repaint
/// only the cells that changed.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    cells: LiveCells,
    generation: u64,
    algorithm: Algorithm,
    bounds: Option<Bounds>,
}

impl Engine {
    /// Empty, unbounded engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict seeding and toggling to `bounds`. Stepping is not restricted.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn cells(&self) -> &LiveCells {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    fn check_bounds(&self, coord: Coord) -> Result<()> {
        match self.bounds {
            Some(bounds) if !bounds.contains(coord) => Err(Error::OutOfBounds(coord)),
            _ => Ok(()),
        }
    }

    /// Replace the whole population with `pattern`.
    /// Nothing changes if any of its cells is out of bounds.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<Delta> {
        pattern.cells().try_for_each(|c| self.check_bounds(c))?;
        let seeded: LiveCells = pattern.cells().collect();
        Ok(self.install(seeded, 0))
    }

    /// Flip one cell without evaluating any rule
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<Delta> {
        self.check_bounds(coord)?;
        let alive = self.cells.toggle(coord);
        Ok(Delta::single(coord, alive))
    }

    /// Advance one generation.
    ///
    /// The next generation is computed against the current one and swapped
    /// in as a whole; the current set stays readable until then.
    pub fn step(&mut self) -> Delta {
        let next = self.algorithm.step(&self.cells);
        let generation = self.generation + 1;
        let delta = self.install(next, generation);
        log::debug!(
            "generation {}: population {}, +{} -{}",
            self.generation,
            self.cells.len(),
            delta.born.len(),
            delta.died.len()
        );
        delta
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) -> Delta {
        self.install(LiveCells::new(), 0)
    }

    /// Replace the population with random soup inside `region`,
    /// clipped to the bounds policy if there is one
    pub fn randomize(&mut self, region: Bounds, density: f64, rng: &mut impl Rng) -> Delta {
        let soup: LiveCells = LiveCells::random(region, density, rng)
            .iter()
            .filter(|&c| self.check_bounds(c).is_ok())
            .collect();
        self.install(soup, 0)
    }

    fn install(&mut self, next: LiveCells, generation: u64) -> Delta {
        let delta = Delta::between(&self.cells, &next);
        self.cells = next;
        self.generation = generation;
        delta
    }
}
