//! Generation stepping over the sparse live-cell set.
//!
//! Work is proportional to the population, never to the area the pattern
//! covers. Both passes read the previous generation only; the next one is
//! built in a fresh set and handed back to the caller to install.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{Cell, CellKey, Coord, LiveCells, live_neighbor_count};

/// Compute generation `N+1` from generation `N` (serial)
pub fn step(current: &LiveCells) -> LiveCells {
    let mut next = LiveCells::with_capacity(current.len());
    let mut visited: HashSet<CellKey> = HashSet::with_capacity(current.len() * 4);

    // Pass 1: survival of live cells
    for cell in current.iter() {
        if Cell::Alive.evolve(live_neighbor_count(current, cell)).is_alive() {
            next.insert(cell);
        }
    }

    // Pass 2: births among dead neighbors of live cells
    for cell in current.iter() {
        for candidate in cell.neighbors() {
            if current.contains(candidate) || !visited.insert(CellKey::encode(candidate)) {
                continue;
            }
            if Cell::Dead.evolve(live_neighbor_count(current, candidate)).is_alive() {
                next.insert(candidate);
            }
        }
    }

    next
}

/// Same result as [`step`], with both passes spread over rayon's pool.
/// Worth it once the population reaches the tens of thousands.
pub fn step_parallel(current: &LiveCells) -> LiveCells {
    let snapshot = current.snapshot();

    let survivors: HashSet<CellKey> = snapshot
        .par_iter()
        .copied()
        .filter(|key| Cell::Alive.evolve(live_neighbor_count(current, key.decode())).is_alive())
        .collect();

    // Candidates shared by several live cells are evaluated more than once;
    // the count only depends on the snapshot so every evaluation agrees.
    let births: HashSet<CellKey> = snapshot
        .par_iter()
        .flat_map_iter(|key| key.decode().neighbors())
        .filter(|&candidate| !current.contains(candidate))
        .filter(|&candidate| Cell::Dead.evolve(live_neighbor_count(current, candidate)).is_alive())
        .map(CellKey::encode)
        .collect();

    let mut next = survivors;
    next.extend(births);
    next.into()
}

/// Cells whose state differs between two generations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delta {
    /// Dead before, alive now; row-major order
    pub born: Vec<Coord>,
    /// Alive before, dead now; row-major order
    pub died: Vec<Coord>,
}

impl Delta {
    pub fn between(old: &LiveCells, new: &LiveCells) -> Self {
        let mut born: Vec<Coord> = new.iter().filter(|&c| !old.contains(c)).collect();
        let mut died: Vec<Coord> = old.iter().filter(|&c| !new.contains(c)).collect();
        born.sort_by_key(|c| (c.y, c.x));
        died.sort_by_key(|c| (c.y, c.x));
        Self { born, died }
    }

    /// One cell changed to `alive`
    pub fn single(coord: Coord, alive: bool) -> Self {
        if alive {
            Self { born: vec![coord], died: Vec::new() }
        } else {
            Self { born: Vec::new(), died: vec![coord] }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }

    pub fn len(&self) -> usize {
        self.born.len() + self.died.len()
    }

    /// `(cell, alive)` pairs, deaths first
    pub fn changes(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.died
            .iter()
            .map(|&c| (c, false))
            .chain(self.born.iter().map(|&c| (c, true)))
    }
}
